use crate::episodes_api::{ListQuery, SortOrder};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Base url of the episodes api.
    pub api_url: String,
    pub limit: usize,
    pub sort: String,
    pub order: SortOrder,
    /// How long a fetched home listing is served before it is fetched again.
    pub revalidate_secs: u64,
    /// Rows highlighted at the top of the home listing.
    pub latest_count: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            api_url: String::from("http://localhost:3333"),
            limit: 12,
            sort: String::from("published_at"),
            order: SortOrder::Desc,
            revalidate_secs: 60 * 60 * 8,
            latest_count: 2,
        }
    }
}

impl LoaderConfig {
    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            limit: self.limit,
            sort: self.sort.clone(),
            order: self.order,
        }
    }

    pub fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }
}
