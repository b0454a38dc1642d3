use crate::{CurrentState, Episode, PlayerAction, PlayerState, StateAction};
use std::sync::Arc;

/// The player operations available to every UI surface.
///
/// Each call is applied immediately and wakes every subscriber.
pub trait PlayerController {
    fn player_state(&self) -> Arc<PlayerState>;

    /// Plays a single episode, replacing the queue.
    fn play(&self, episode: Episode);

    /// Replaces the queue with `list` and starts playing at `index`.
    fn play_list(&self, list: Vec<Episode>, index: usize);

    fn play_next(&self);
    fn play_previous(&self);
    fn toggle_play(&self);
    fn toggle_loop(&self);
    fn toggle_shuffle(&self);

    /// For playback backends reporting what actually happened.
    fn set_playing_state(&self, is_playing: bool);

    fn clear_player_state(&self);

    /// Restarts when looping, otherwise moves on (or clears at the end).
    fn episode_ended(&self);
}

impl CurrentState {
    fn player(&self, action: PlayerAction) {
        self.update(vec![StateAction::Player(action)]);
    }
}

impl PlayerController for CurrentState {
    fn player_state(&self) -> Arc<PlayerState> {
        self.get().player_state()
    }

    fn play(&self, episode: Episode) {
        self.player(PlayerAction::Play(episode));
    }

    fn play_list(&self, list: Vec<Episode>, index: usize) {
        self.player(PlayerAction::PlayList { list, index });
    }

    fn play_next(&self) {
        self.player(PlayerAction::PlayNext);
    }

    fn play_previous(&self) {
        self.player(PlayerAction::PlayPrevious);
    }

    fn toggle_play(&self) {
        self.player(PlayerAction::TogglePlay);
    }

    fn toggle_loop(&self) {
        self.player(PlayerAction::ToggleLoop);
    }

    fn toggle_shuffle(&self) {
        self.player(PlayerAction::ToggleShuffle);
    }

    fn set_playing_state(&self, is_playing: bool) {
        self.player(PlayerAction::SetPlayingState(is_playing));
    }

    fn clear_player_state(&self) {
        self.player(PlayerAction::ClearPlayerState);
    }

    fn episode_ended(&self) {
        self.player(PlayerAction::EpisodeEnded);
    }
}
