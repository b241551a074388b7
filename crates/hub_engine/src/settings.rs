use std::time::Duration;

use crate::article::DEFAULT_TOPIC;

pub const YOUTUBE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";
pub const NEWS_SEARCH_ENDPOINT: &str = "https://newsapi.org/v2/everything";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub video_endpoint: String,
    pub article_endpoint: String,
    /// Article search term used when the user leaves the box empty.
    pub default_topic: String,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            video_endpoint: YOUTUBE_SEARCH_ENDPOINT.to_string(),
            article_endpoint: NEWS_SEARCH_ENDPOINT.to_string(),
            default_topic: DEFAULT_TOPIC.to_string(),
            request_timeout: None,
        }
    }
}
