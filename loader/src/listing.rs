use crate::episodes_api::ApiEpisode;
use crate::format::{format_duration, format_published_at};
use state::Episode;
use std::time::{Duration, Instant};
use tracing::warn;

/// One row of the home page, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeListing {
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    pub published_at: String,
    pub duration: u64,
    pub duration_as_string: String,
    pub url: String,
}

impl EpisodeListing {
    pub fn to_episode(&self) -> Episode {
        Episode::new(self.title.clone())
            .with_members(self.members.clone())
            .with_thumbnail(self.thumbnail.clone())
            .with_duration(self.duration)
            .with_url(self.url.clone())
    }
}

impl From<ApiEpisode> for EpisodeListing {
    fn from(episode: ApiEpisode) -> Self {
        let published_at = format_published_at(&episode.published_at).unwrap_or_else(|err| {
            warn!(id = %episode.id, %err, "Showing unparsed publication date");
            episode.published_at.clone()
        });

        EpisodeListing {
            published_at,
            duration: episode.file.duration,
            duration_as_string: format_duration(episode.file.duration),
            url: episode.file.url,
            id: episode.id,
            title: episode.title,
            members: episode.members,
            thumbnail: episode.thumbnail,
        }
    }
}

/// The home page: a few highlighted releases, then everything else.
#[derive(Debug, Clone)]
pub struct HomeListing {
    latest_episodes: Vec<EpisodeListing>,
    all_episodes: Vec<EpisodeListing>,
    fetched_at: Instant,
}

impl HomeListing {
    pub fn new(mut episodes: Vec<EpisodeListing>, latest_count: usize) -> HomeListing {
        let all_episodes = episodes.split_off(latest_count.min(episodes.len()));

        HomeListing {
            latest_episodes: episodes,
            all_episodes,
            fetched_at: Instant::now(),
        }
    }

    pub fn latest_episodes(&self) -> &[EpisodeListing] {
        &self.latest_episodes
    }

    pub fn all_episodes(&self) -> &[EpisodeListing] {
        &self.all_episodes
    }

    /// Every row in display order.
    pub fn episodes(&self) -> impl Iterator<Item = &EpisodeListing> {
        self.latest_episodes.iter().chain(self.all_episodes.iter())
    }

    pub fn len(&self) -> usize {
        self.latest_episodes.len() + self.all_episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The row at `index` in display order.
    pub fn get(&self, index: usize) -> Option<&EpisodeListing> {
        self.episodes().nth(index)
    }

    pub fn playlist(&self) -> Vec<Episode> {
        self.episodes().map(EpisodeListing::to_episode).collect()
    }

    pub fn is_stale(&self, max_age: Duration) -> bool {
        self.fetched_at.elapsed() >= max_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::episodes_api::ApiFile;

    fn api_episode(n: usize) -> ApiEpisode {
        ApiEpisode {
            id: format!("ep-{}", n),
            title: format!("Episode {}", n),
            members: String::from("Diego e Richard"),
            thumbnail: format!("https://example.com/{}.jpg", n),
            published_at: String::from("2021-01-08 16:40:01"),
            file: ApiFile {
                url: format!("https://example.com/{}.m4a", n),
                duration: 3725,
            },
        }
    }

    fn rows(count: usize) -> Vec<EpisodeListing> {
        (0..count).map(|n| api_episode(n).into()).collect()
    }

    #[test]
    fn listing_row() {
        let row = EpisodeListing::from(api_episode(1));
        assert_eq!(row.id, "ep-1");
        assert_eq!(row.published_at, "8 jan 21");
        assert_eq!(row.duration, 3725);
        assert_eq!(row.duration_as_string, "01:02:05");
        assert_eq!(row.url, "https://example.com/1.m4a");

        let episode = row.to_episode();
        assert_eq!(episode.title(), "Episode 1");
        assert_eq!(episode.members(), "Diego e Richard");
        assert_eq!(episode.thumbnail(), "https://example.com/1.jpg");
        assert_eq!(episode.duration(), 3725);
        assert_eq!(episode.url(), "https://example.com/1.m4a");
    }

    #[test]
    fn unparsed_date_is_kept() {
        let mut episode = api_episode(1);
        episode.published_at = String::from("someday");
        assert_eq!(EpisodeListing::from(episode).published_at, "someday");
    }

    #[test]
    fn splits_latest() {
        let home = HomeListing::new(rows(12), 2);
        assert_eq!(home.latest_episodes().len(), 2);
        assert_eq!(home.all_episodes().len(), 10);
        assert_eq!(home.len(), 12);
        assert_eq!(home.get(0).unwrap().id, "ep-0");
        assert_eq!(home.get(2).unwrap().id, "ep-2");
        assert_eq!(home.get(11).unwrap().id, "ep-11");
        assert!(home.get(12).is_none());

        let playlist = home.playlist();
        assert_eq!(playlist.len(), 12);
        assert_eq!(playlist[3].title(), "Episode 3");
    }

    #[test]
    fn short_listing() {
        let home = HomeListing::new(rows(1), 2);
        assert_eq!(home.latest_episodes().len(), 1);
        assert!(home.all_episodes().is_empty());

        let home = HomeListing::new(Vec::new(), 2);
        assert!(home.is_empty());
    }

    #[test]
    fn staleness() {
        let home = HomeListing::new(rows(3), 2);
        assert!(!home.is_stale(Duration::from_secs(60 * 60 * 8)));
        assert!(home.is_stale(Duration::ZERO));
    }
}
