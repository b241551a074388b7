use serde::Deserialize;

use crate::remote::RESULT_CAP;
use crate::{SearchEndpoint, SearchError, SearchSettings, VideoResult};

/// YouTube Data API `search.list`, restricted to videos.
#[derive(Debug, Clone)]
pub struct VideoSearch {
    endpoint: String,
}

impl VideoSearch {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self::new(settings.video_endpoint.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct VideoPayload {
    #[serde(default)]
    items: Option<Vec<VideoItem>>,
}

#[derive(Debug, Default, Deserialize)]
struct VideoItem {
    #[serde(default)]
    id: VideoId,
    #[serde(default)]
    snippet: VideoSnippet,
}

#[derive(Debug, Default, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId", default)]
    video_id: String,
}

#[derive(Debug, Default, Deserialize)]
struct VideoSnippet {
    #[serde(default)]
    title: String,
}

impl SearchEndpoint for VideoSearch {
    type Payload = VideoPayload;
    type Item = VideoResult;

    const SERVICE: &'static str = "YouTube";

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn search_term(&self, query: &str) -> Result<String, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::Validation);
        }
        Ok(query.to_string())
    }

    fn query_params(&self, term: &str, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("part", "snippet".to_string()),
            ("q", term.to_string()),
            ("type", "video".to_string()),
            ("maxResults", RESULT_CAP.to_string()),
            ("key", api_key.to_string()),
        ]
    }

    fn map_payload(&self, payload: VideoPayload) -> Vec<VideoResult> {
        payload
            .items
            .unwrap_or_default()
            .into_iter()
            .take(RESULT_CAP)
            .map(|item| VideoResult {
                title: item.snippet.title,
                video_id: item.id.video_id,
            })
            .collect()
    }
}
