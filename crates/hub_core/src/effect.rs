use crate::RequestToken;

/// Side effects requested by [`crate::update`]; executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the video search client. The query is passed through unvalidated.
    SearchVideos { token: RequestToken, query: String },
    /// Run the article search client. An empty query means the default topic.
    SearchArticles { token: RequestToken, query: String },
    /// Abort an in-flight request whose result is no longer wanted.
    CancelSearch { token: RequestToken },
    /// Open a generic web search for a title in the system browser.
    OpenExternalSearch { title: String },
    /// Open a fully formed URL in the system browser.
    OpenUrl { url: String },
}
