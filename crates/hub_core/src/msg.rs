use crate::{ArticleResult, RequestToken, SearchFailure, VideoResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The interface became visible for the first time.
    Mounted,
    /// The interface is going away; in-flight work must not write state.
    Unmounted,
    /// User edited the video search box.
    VideoQueryChanged(String),
    /// User pressed the video Search button.
    VideoSearchClicked,
    /// User edited the news search box.
    ArticleQueryChanged(String),
    /// User pressed the news Search button.
    ArticleSearchClicked,
    /// Engine resolution of a video search.
    VideoSearchFinished {
        token: RequestToken,
        result: Result<Vec<VideoResult>, SearchFailure>,
    },
    /// Engine resolution of an article search.
    ArticleSearchFinished {
        token: RequestToken,
        result: Result<Vec<ArticleResult>, SearchFailure>,
    },
    /// User clicked "Read More" on an item that only has a title.
    ReadMoreClicked { title: String },
    /// User clicked a link that already carries a URL.
    OpenLinkClicked { url: String },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
