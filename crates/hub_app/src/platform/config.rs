use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context};
use hub_engine::{ApiKey, ApiKeys, SearchSettings};

use super::logging::LogDestination;

const DEFAULT_LOG_FILE: &str = "finhub.log";

/// Runtime configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub keys: ApiKeys,
    pub search: SearchSettings,
    pub log_destination: LogDestination,
    pub log_path: PathBuf,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let first_key = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(name))
                .find_map(ApiKey::non_blank)
        };

        let keys = ApiKeys {
            youtube: first_key(&["YOUTUBE_API_KEY", "VITE_YOUTUBE_API_KEY"]),
            news: first_key(&["NEWS_API_KEY", "VITE_NEWS_API_KEY"]),
        };

        let mut search = SearchSettings::default();
        if let Some(endpoint) = lookup("FINHUB_VIDEO_ENDPOINT") {
            search.video_endpoint = endpoint;
        }
        if let Some(endpoint) = lookup("FINHUB_ARTICLE_ENDPOINT") {
            search.article_endpoint = endpoint;
        }
        if let Some(topic) = lookup("FINHUB_DEFAULT_TOPIC").filter(|t| !t.trim().is_empty()) {
            search.default_topic = topic;
        }
        if let Some(secs) = lookup("FINHUB_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("FINHUB_TIMEOUT_SECS is not a number: {secs:?}"))?;
            search.request_timeout = Some(Duration::from_secs(secs));
        }

        let log_destination = match lookup("FINHUB_LOG") {
            Some(value) => value
                .parse()
                .map_err(|err: String| anyhow!("FINHUB_LOG: {err}"))?,
            None => LogDestination::default(),
        };
        let log_path = lookup("FINHUB_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            keys,
            search,
            log_destination,
            log_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.keys, ApiKeys::default());
        assert_eq!(config.search, SearchSettings::default());
        assert_eq!(config.log_destination, LogDestination::File);
        assert_eq!(config.log_path, PathBuf::from("finhub.log"));
    }

    #[test]
    fn vite_prefixed_keys_are_accepted() {
        let config = config_from(&[
            ("VITE_YOUTUBE_API_KEY", "yt"),
            ("NEWS_API_KEY", "news"),
        ])
        .unwrap();

        assert_eq!(config.keys.youtube, Some(ApiKey::new("yt")));
        assert_eq!(config.keys.news, Some(ApiKey::new("news")));
    }

    #[test]
    fn blank_key_falls_through_to_next_name() {
        let config = config_from(&[
            ("YOUTUBE_API_KEY", "  "),
            ("VITE_YOUTUBE_API_KEY", "yt"),
        ])
        .unwrap();
        assert_eq!(config.keys.youtube, Some(ApiKey::new("yt")));

        let config = config_from(&[("NEWS_API_KEY", "")]).unwrap();
        assert_eq!(config.keys.news, None);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("FINHUB_VIDEO_ENDPOINT", "http://localhost:9000/videos"),
            ("FINHUB_DEFAULT_TOPIC", "stocks"),
            ("FINHUB_TIMEOUT_SECS", "15"),
            ("FINHUB_LOG", "both"),
        ])
        .unwrap();

        assert_eq!(config.search.video_endpoint, "http://localhost:9000/videos");
        assert_eq!(config.search.default_topic, "stocks");
        assert_eq!(config.search.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.log_destination, LogDestination::Both);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config_from(&[("FINHUB_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_from(&[("FINHUB_LOG", "syslog")]).is_err());
    }
}
