use futures::channel::mpsc::{channel as fchannel, Receiver as FReceiver, Sender as FSender};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::debug;

mod episode;
mod player_controller;
mod player_state;
mod state_error;

pub use episode::Episode;
pub use player_controller::PlayerController;
pub use player_state::{PlayerAction, PlayerState};
pub use state_error::StateError;

#[derive(Debug)]
pub enum StateAction {
    Player(PlayerAction),
    SetLoading(bool),
    SetListingError(Option<StateError>),
}

#[derive(Debug, Clone, Default)]
/// Everything that is needed to render the UI.
pub struct State {
    pub(crate) player_state: Arc<PlayerState>,
    pub(crate) loading: bool,
    pub(crate) listing_error: Option<StateError>,
}

impl State {
    pub fn new() -> Self {
        State::default()
    }

    pub fn player_state(&self) -> Arc<PlayerState> {
        Arc::clone(&self.player_state)
    }

    pub fn playing_episode(&self) -> Option<&Episode> {
        self.player_state.current_episode()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn listing_error(&self) -> Option<&StateError> {
        self.listing_error.as_ref()
    }

    fn apply<R: Rng + ?Sized>(&self, actions: Vec<StateAction>, rng: &mut R) -> State {
        let mut next = self.clone();
        let mut next_player_state = None;

        for action in actions {
            debug!(?action, "Applying");

            match action {
                StateAction::Player(action) => {
                    next_player_state
                        .get_or_insert_with(|| (*self.player_state).clone())
                        .apply(action, rng);
                }
                StateAction::SetLoading(loading) => {
                    next.loading = loading;
                }
                StateAction::SetListingError(error) => {
                    next.listing_error = error;
                }
            }
        }

        if let Some(player_state) = next_player_state {
            next.player_state = Arc::new(player_state);
        }

        next
    }
}

/// The single shared state of one application root.
///
/// Readers get immutable snapshots. Writers apply batches of actions
/// synchronously, after which every subscriber is woken once.
pub struct CurrentState {
    state: RwLock<Arc<State>>,
    rng: Mutex<SmallRng>,
    subscribers: Mutex<Vec<FSender<()>>>,
}

impl std::fmt::Debug for CurrentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CurrentState")
    }
}

impl CurrentState {
    /// Creates a state that can be gotten or updated.
    ///
    /// Also creates a notifier that can be used to figure out when the state has been updated.
    pub fn new() -> (Arc<CurrentState>, FReceiver<()>) {
        CurrentState::with_rng(SmallRng::from_entropy())
    }

    /// Like `new`, with a fixed source for shuffle picks.
    pub fn with_rng(rng: SmallRng) -> (Arc<CurrentState>, FReceiver<()>) {
        let current_state = Arc::new(CurrentState {
            state: RwLock::new(Arc::new(State::new())),
            rng: Mutex::new(rng),
            subscribers: Mutex::new(Vec::new()),
        });
        let receive_update = current_state.subscribe();

        (current_state, receive_update)
    }

    /// Another notifier. Yields once per update, coalescing updates the
    /// receiver has not caught up with yet.
    pub fn subscribe(&self) -> FReceiver<()> {
        let (send_update, receive_update) = fchannel(0);
        lock(&self.subscribers).push(send_update);

        receive_update
    }

    pub fn get(&self) -> Arc<State> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn update(&self, actions: Vec<StateAction>) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let next = state.apply(actions, &mut *lock(&self.rng));
            *state = Arc::new(next);
        }

        // Only send if they're not already waiting for an update.
        lock(&self.subscribers).retain_mut(|send_update| match send_update.try_send(()) {
            Ok(()) => true,
            Err(err) => !err.is_disconnected(),
        });
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
