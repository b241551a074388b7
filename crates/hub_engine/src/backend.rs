use crate::{
    ApiKeys, ArticleResult, ArticleSearch, RemoteSearch, SearchError, SearchSettings, VideoResult,
    VideoSearch,
};

/// The two search operations the engine can run.
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search_videos(&self, query: &str) -> Result<Vec<VideoResult>, SearchError>;

    async fn search_articles(&self, query: &str) -> Result<Vec<ArticleResult>, SearchError>;
}

/// Live backend talking to YouTube and NewsAPI with injected keys.
#[derive(Debug, Clone)]
pub struct ReqwestSearchBackend {
    remote: RemoteSearch,
    videos: VideoSearch,
    articles: ArticleSearch,
    keys: ApiKeys,
}

impl ReqwestSearchBackend {
    pub fn new(settings: SearchSettings, keys: ApiKeys) -> Result<Self, SearchError> {
        Ok(Self {
            remote: RemoteSearch::new(&settings)?,
            videos: VideoSearch::from_settings(&settings),
            articles: ArticleSearch::from_settings(&settings),
            keys,
        })
    }
}

#[async_trait::async_trait]
impl SearchBackend for ReqwestSearchBackend {
    async fn search_videos(&self, query: &str) -> Result<Vec<VideoResult>, SearchError> {
        self.remote
            .run(&self.videos, query, self.keys.youtube.as_ref())
            .await
    }

    async fn search_articles(&self, query: &str) -> Result<Vec<ArticleResult>, SearchError> {
        self.remote
            .run(&self.articles, query, self.keys.news.as_ref())
            .await
    }
}
