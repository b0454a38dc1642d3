mod config;
mod episodes_api;
mod format;
mod listing;
mod loader_error;

pub use config::LoaderConfig;
pub use episodes_api::{
    parse_episode, parse_episodes, ApiEpisode, ApiFile, EpisodesApi, ListQuery, SortOrder,
};
pub use format::{format_duration, format_published_at};
pub use listing::{EpisodeListing, HomeListing};
pub use loader_error::LoaderError;

use async_std::task;
use state::{CurrentState, StateAction};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

#[derive(Debug, Default)]
struct LoaderPriv {
    home: Option<Arc<HomeListing>>,
    in_flight: usize,
}

/// Fetches the episode listing, keeps it around for the revalidate interval and
/// reports progress into the shared state.
#[derive(Debug, Clone)]
pub struct Loader {
    current: Arc<CurrentState>,
    api: EpisodesApi,
    config: Arc<LoaderConfig>,
    data: Arc<Mutex<LoaderPriv>>,
}

impl Loader {
    pub fn new(current: Arc<CurrentState>, config: LoaderConfig) -> Result<Loader, LoaderError> {
        Ok(Loader {
            current,
            api: EpisodesApi::new(&config.api_url)?,
            config: Arc::new(config),
            data: Arc::new(Mutex::new(LoaderPriv::default())),
        })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn cached(&self) -> Option<Arc<HomeListing>> {
        self.lock().home.clone()
    }

    /// The home listing, fetched again once the cached copy is stale.
    pub async fn home(&self) -> Result<Arc<HomeListing>, LoaderError> {
        if let Some(home) = self.cached() {
            if !home.is_stale(self.config.revalidate()) {
                return Ok(home);
            }
        }

        self.refresh().await
    }

    /// Fetches the home listing now. If that fails and an older listing is
    /// cached, the older listing is returned.
    pub async fn refresh(&self) -> Result<Arc<HomeListing>, LoaderError> {
        {
            let mut data = self.lock();
            data.in_flight += 1;
            if data.in_flight == 1 {
                self.current.update(vec![StateAction::SetLoading(true)]);
            }
        }

        let result = self
            .api
            .fetch(&self.config.list_query())
            .await
            .map(|episodes| {
                let rows = episodes.into_iter().map(EpisodeListing::from).collect();
                Arc::new(HomeListing::new(rows, self.config.latest_count))
            });

        self.finish(result)
    }

    fn finish(
        &self,
        result: Result<Arc<HomeListing>, LoaderError>,
    ) -> Result<Arc<HomeListing>, LoaderError> {
        let mut actions = Vec::with_capacity(2);
        let result = {
            let mut data = self.lock();
            data.in_flight = data.in_flight.saturating_sub(1);
            if data.in_flight == 0 {
                actions.push(StateAction::SetLoading(false));
            }

            let result = match result {
                Ok(home) => {
                    info!(episodes = home.len(), "Home listing updated");
                    data.home = Some(Arc::clone(&home));
                    actions.push(StateAction::SetListingError(None));
                    Ok(home)
                }
                Err(err) => match &data.home {
                    Some(stale) => {
                        warn!(%err, "Revalidation failed, serving the previous listing");
                        Ok(Arc::clone(stale))
                    }
                    None => {
                        warn!(%err, "Could not load the home listing");
                        actions.push(StateAction::SetListingError(Some((&err).into())));
                        Err(err)
                    }
                },
            };
            result
        };

        if !actions.is_empty() {
            self.current.update(actions);
        }

        result
    }

    pub async fn episode(&self, id: &str) -> Result<EpisodeListing, LoaderError> {
        Ok(self.api.fetch_one(id).await?.into())
    }

    /// Refreshes the home listing every revalidate interval, for as long as the
    /// returned task is alive.
    pub fn spawn_revalidation(&self) -> task::JoinHandle<()> {
        let loader = self.clone();
        task::spawn(async move {
            loop {
                task::sleep(loader.config.revalidate()).await;
                if let Err(err) = loader.refresh().await {
                    warn!(%err, "Scheduled revalidation failed");
                }
            }
        })
    }

    fn lock(&self) -> MutexGuard<'_, LoaderPriv> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
