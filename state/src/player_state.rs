use crate::Episode;
use rand::Rng;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum PlayerAction {
    Play(Episode),
    PlayList { list: Vec<Episode>, index: usize },
    PlayNext,
    PlayPrevious,
    TogglePlay,
    ToggleLoop,
    ToggleShuffle,
    SetPlayingState(bool),
    ClearPlayerState,
    EpisodeEnded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// What is playing, and how.
///
/// The queue and `current_index` form a cursor over an ordered list. The three
/// flags are independent switches. Whenever the queue is non-empty,
/// `current_index` points into it; when it is empty, `current_index` is 0.
pub struct PlayerState {
    episode_queue: Vec<Episode>,
    current_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        PlayerState::default()
    }

    pub fn episode_queue(&self) -> &[Episode] {
        &self.episode_queue
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_queue.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index < self.episode_queue.len().saturating_sub(1)
    }

    pub(crate) fn apply<R: Rng + ?Sized>(&mut self, action: PlayerAction, rng: &mut R) {
        match action {
            PlayerAction::Play(episode) => self.play(episode),
            PlayerAction::PlayList { list, index } => self.play_list(list, index),
            PlayerAction::PlayNext => self.play_next(rng),
            PlayerAction::PlayPrevious => self.play_previous(),
            PlayerAction::TogglePlay => self.toggle_play(),
            PlayerAction::ToggleLoop => self.toggle_loop(),
            PlayerAction::ToggleShuffle => self.toggle_shuffle(),
            PlayerAction::SetPlayingState(is_playing) => self.set_playing_state(is_playing),
            PlayerAction::ClearPlayerState => self.clear(),
            PlayerAction::EpisodeEnded => self.episode_ended(rng),
        }
    }

    pub(crate) fn play(&mut self, episode: Episode) {
        self.episode_queue = vec![episode];
        self.current_index = 0;
        self.is_playing = true;
    }

    pub(crate) fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        if index != 0 && index >= list.len() {
            warn!(
                index,
                len = list.len(),
                "Ignoring playlist with out-of-range start index"
            );
            return;
        }

        self.episode_queue = list;
        self.current_index = index;
        self.is_playing = true;
    }

    /// Under shuffle, any position may come next, including the current one.
    pub(crate) fn play_next<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            if !self.episode_queue.is_empty() {
                self.current_index = rng.gen_range(0..self.episode_queue.len());
            }
        } else if self.has_next() {
            self.current_index += 1;
        }
    }

    pub(crate) fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_index -= 1;
        }
    }

    pub(crate) fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub(crate) fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub(crate) fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    pub(crate) fn set_playing_state(&mut self, is_playing: bool) {
        self.is_playing = is_playing;
    }

    pub(crate) fn clear(&mut self) {
        self.episode_queue.clear();
        self.current_index = 0;
    }

    /// The current episode finished on its own.
    pub(crate) fn episode_ended<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_looping {
            // Same episode again.
        } else if self.has_next() && !self.episode_queue.is_empty() {
            self.play_next(rng);
        } else {
            self.clear();
        }
    }
}
