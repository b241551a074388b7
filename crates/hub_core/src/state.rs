use crate::content::{BLOG_POSTS, DEFAULT_VIDEOS, TRENDING_NEWS};
use crate::view_model::{AppViewModel, QueryView};

/// Identifies one started request. Issued in increasing order, never reused.
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

/// Search box, loading flag and error line of one flow.
///
/// `loading` and `error_message` are never set at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    text: String,
    loading: bool,
    error_message: Option<String>,
    in_flight: Option<RequestToken>,
}

impl QueryState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Enters Loading for `token`; returns the request it supersedes, if any.
    fn begin(&mut self, token: RequestToken) -> Option<RequestToken> {
        self.loading = true;
        self.error_message = None;
        self.in_flight.replace(token)
    }

    fn accepts(&self, token: RequestToken) -> bool {
        self.in_flight == Some(token)
    }

    fn succeed(&mut self) {
        self.loading = false;
        self.in_flight = None;
        self.error_message = None;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.in_flight = None;
        self.error_message = Some(message);
    }

    /// Shows `message` without touching a request in flight, whose loading line wins.
    fn reject(&mut self, message: String) -> bool {
        if self.in_flight.is_some() || self.error_message.as_deref() == Some(message.as_str()) {
            return false;
        }
        self.error_message = Some(message);
        true
    }

    fn abandon(&mut self) -> Option<RequestToken> {
        self.loading = false;
        self.in_flight.take()
    }

    fn view(&self) -> QueryView {
        QueryView {
            text: self.text.clone(),
            loading: self.loading,
            error: self.error_message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    video: QueryState,
    videos: Vec<VideoResult>,
    article: QueryState,
    articles: Vec<ArticleResult>,
    next_token: RequestToken,
    mounted: bool,
    unmounted: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            video: QueryState::default(),
            videos: default_videos(),
            article: QueryState::default(),
            articles: Vec::new(),
            next_token: 1,
            mounted: false,
            unmounted: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            video: self.video.view(),
            videos: self.videos.clone(),
            article: self.article.view(),
            articles: self.articles.clone(),
            blogs: &BLOG_POSTS,
            trending: &TRENDING_NEWS,
            dirty: self.dirty,
        }
    }

    pub fn video_query(&self) -> &QueryState {
        &self.video
    }

    pub fn article_query(&self) -> &QueryState {
        &self.article
    }

    pub fn videos(&self) -> &[VideoResult] {
        &self.videos
    }

    pub fn articles(&self) -> &[ArticleResult] {
        &self.articles
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted && !self.unmounted
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Flips to mounted; returns false if the view was mounted before.
    pub(crate) fn mount(&mut self) -> bool {
        if self.mounted || self.unmounted {
            return false;
        }
        self.mounted = true;
        true
    }

    /// Tears the view down and returns every request still in flight.
    pub(crate) fn unmount(&mut self) -> Vec<RequestToken> {
        self.unmounted = true;
        let pending: Vec<RequestToken> = [self.video.abandon(), self.article.abandon()]
            .into_iter()
            .flatten()
            .collect();
        self.mark_dirty();
        pending
    }

    pub(crate) fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    pub(crate) fn set_video_text(&mut self, text: String) {
        if self.video.text != text {
            self.video.set_text(text);
            self.mark_dirty();
        }
    }

    pub(crate) fn set_article_text(&mut self, text: String) {
        if self.article.text != text {
            self.article.set_text(text);
            self.mark_dirty();
        }
    }

    /// Refuses to start a video request, leaving any running one untouched.
    pub(crate) fn reject_video_query(&mut self, message: String) {
        if self.video.reject(message) {
            self.mark_dirty();
        }
    }

    /// Starts a video request; returns its token and the token it supersedes.
    pub(crate) fn begin_video_search(&mut self) -> (RequestToken, Option<RequestToken>) {
        let token = self.issue_token();
        let superseded = self.video.begin(token);
        self.mark_dirty();
        (token, superseded)
    }

    /// Starts an article request; returns its token and the token it supersedes.
    pub(crate) fn begin_article_search(&mut self) -> (RequestToken, Option<RequestToken>) {
        let token = self.issue_token();
        let superseded = self.article.begin(token);
        self.mark_dirty();
        (token, superseded)
    }

    /// Applies a video resolution. Stale tokens are ignored; returns whether it was applied.
    pub(crate) fn finish_video_search(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<VideoResult>, String>,
    ) -> bool {
        if !self.video.accepts(token) {
            return false;
        }
        match outcome {
            Ok(videos) => {
                self.videos = videos;
                self.video.succeed();
            }
            // The last successful list stays on screen.
            Err(message) => self.video.fail(message),
        }
        self.mark_dirty();
        true
    }

    /// Applies an article resolution. Stale tokens are ignored; returns whether it was applied.
    pub(crate) fn finish_article_search(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<ArticleResult>, String>,
    ) -> bool {
        if !self.article.accepts(token) {
            return false;
        }
        match outcome {
            Ok(articles) => {
                self.articles = articles;
                self.article.succeed();
            }
            Err(message) => {
                self.articles.clear();
                self.article.fail(message);
            }
        }
        self.mark_dirty();
        true
    }

    fn issue_token(&mut self) -> RequestToken {
        let token = self.next_token;
        self.next_token += 1;
        token
    }
}

fn default_videos() -> Vec<VideoResult> {
    DEFAULT_VIDEOS
        .iter()
        .map(|(title, video_id)| VideoResult {
            title: (*title).to_string(),
            video_id: (*video_id).to_string(),
        })
        .collect()
}
