use crate::{ArticleResult, BlogPost, TrendingNews, VideoResult};

/// Snapshot of one search flow as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryView {
    pub text: String,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub video: QueryView,
    pub videos: Vec<VideoResult>,
    pub article: QueryView,
    pub articles: Vec<ArticleResult>,
    pub blogs: &'static [BlogPost],
    pub trending: &'static [TrendingNews],
    pub dirty: bool,
}
