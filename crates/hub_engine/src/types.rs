/// Caller-chosen identifier of one search request.
pub type RequestToken = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoResult {
    pub title: String,
    pub video_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleResult {
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    VideoSearchCompleted {
        token: RequestToken,
        result: Result<Vec<VideoResult>, crate::SearchError>,
    },
    ArticleSearchCompleted {
        token: RequestToken,
        result: Result<Vec<ArticleResult>, crate::SearchError>,
    },
}

impl EngineEvent {
    pub fn token(&self) -> RequestToken {
        match self {
            EngineEvent::VideoSearchCompleted { token, .. }
            | EngineEvent::ArticleSearchCompleted { token, .. } => *token,
        }
    }
}
