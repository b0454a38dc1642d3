use anyhow::Context;
use clap::Parser;
use loader::LoaderConfig;
use std::fs;
use std::path::PathBuf;

/// Browse the latest episodes and drive the player from the terminal.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// TOML file with loader settings
    #[arg(short, long, env = "PODCASTR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base url of the episodes api
    #[arg(long, env = "PODCASTR_API_URL")]
    pub api_url: Option<String>,

    /// Episodes fetched for the home listing
    #[arg(long, env = "PODCASTR_LIMIT")]
    pub limit: Option<usize>,

    /// Seconds a fetched listing is reused before fetching it again
    #[arg(long)]
    pub revalidate_secs: Option<u64>,
}

impl Args {
    /// File settings first, then flags and environment on top.
    pub fn loader_config(&self) -> anyhow::Result<LoaderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Cannot read {}", path.display()))?;
                parse_config(&raw).with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => LoaderConfig::default(),
        };

        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(revalidate_secs) = self.revalidate_secs {
            config.revalidate_secs = revalidate_secs;
        }

        Ok(config)
    }
}

fn parse_config(raw: &str) -> anyhow::Result<LoaderConfig> {
    Ok(toml::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::SortOrder;

    #[test]
    fn toml_config() {
        let config = parse_config(
            r#"
            api_url = "https://podcastr.example.com/api"
            order = "asc"
            latest_count = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.api_url, "https://podcastr.example.com/api");
        assert_eq!(config.order, SortOrder::Asc);
        assert_eq!(config.latest_count, 3);
        assert_eq!(config.limit, 12);
    }

    #[test]
    fn bad_toml_config() {
        assert!(parse_config("order = \"sideways\"").is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "podcastr",
            "--api-url",
            "http://127.0.0.1:4000",
            "--limit",
            "20",
        ]);
        let config = args.loader_config().unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:4000");
        assert_eq!(config.limit, 20);
        assert_eq!(config.revalidate_secs, 28800);
    }
}
