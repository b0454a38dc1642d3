use crate::LoaderError;
use serde::{Deserialize, Deserializer};
use surf::Url;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Pagination and ordering for the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: usize,
    pub sort: String,
    pub order: SortOrder,
}

#[derive(Debug, Deserialize)]
pub struct ApiFile {
    #[serde(default)]
    pub url: String,

    /// Seconds. Some servers send it as a string.
    #[serde(deserialize_with = "lenient_seconds")]
    pub duration: u64,
}

#[derive(Debug, Deserialize)]
pub struct ApiEpisode {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub members: String,

    #[serde(default)]
    pub thumbnail: String,

    #[serde(default)]
    pub published_at: String,

    pub file: ApiFile,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Integer(u64),
    Float(f64),
    Text(String),
}

fn lenient_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match Lenient::deserialize(deserializer)? {
        Lenient::Integer(seconds) => Ok(seconds),
        Lenient::Float(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(seconds as u64),
        Lenient::Float(seconds) => Err(serde::de::Error::custom(format!(
            "{} is not a duration",
            seconds
        ))),
        Lenient::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Lenient::deserialize(deserializer)? {
        Lenient::Integer(id) => Ok(id.to_string()),
        Lenient::Float(id) => Ok(id.to_string()),
        Lenient::Text(id) => Ok(id),
    }
}

pub fn parse_episodes(body: &str) -> Result<Vec<ApiEpisode>, LoaderError> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_episode(body: &str) -> Result<ApiEpisode, LoaderError> {
    Ok(serde_json::from_str(body)?)
}

/// Client for a json-server style `/episodes` resource.
#[derive(Debug, Clone)]
pub struct EpisodesApi {
    base: Url,
}

impl EpisodesApi {
    pub fn new(base: &str) -> Result<EpisodesApi, LoaderError> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(LoaderError::NotABase(base.to_string()));
        }

        Ok(EpisodesApi { base })
    }

    fn episodes_url(&self, id: Option<&str>) -> Result<Url, LoaderError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| LoaderError::NotABase(self.base.to_string()))?;
            segments.pop_if_empty().push("episodes");
            if let Some(id) = id {
                segments.push(id);
            }
        }

        Ok(url)
    }

    pub fn list_url(&self, query: &ListQuery) -> Result<Url, LoaderError> {
        let mut url = self.episodes_url(None)?;
        url.query_pairs_mut()
            .append_pair("_limit", &query.limit.to_string())
            .append_pair("_sort", &query.sort)
            .append_pair("_order", query.order.as_str());

        Ok(url)
    }

    pub fn episode_url(&self, id: &str) -> Result<Url, LoaderError> {
        self.episodes_url(Some(id))
    }

    pub async fn fetch(&self, query: &ListQuery) -> Result<Vec<ApiEpisode>, LoaderError> {
        let url = self.list_url(query)?;
        info!(%url, "Fetching episodes");

        parse_episodes(&get_string(url).await?)
    }

    pub async fn fetch_one(&self, id: &str) -> Result<ApiEpisode, LoaderError> {
        let url = self.episode_url(id)?;
        info!(%url, "Fetching episode");

        parse_episode(&get_string(url).await?)
    }
}

async fn get_string(url: Url) -> Result<String, LoaderError> {
    let mut res = surf::get(url).await?;
    if !res.status().is_success() {
        return Err(LoaderError::Status(res.status()));
    }

    Ok(res.body_string().await?)
}
