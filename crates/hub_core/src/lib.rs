//! Finance hub core: pure view-state machine, view model and static content.
mod content;
mod effect;
mod failure;
mod links;
mod msg;
mod state;
mod update;
mod view_model;

pub use content::{BlogPost, TrendingNews, BLOG_POSTS, DEFAULT_VIDEOS, TRENDING_NEWS};
pub use effect::Effect;
pub use failure::{Flow, SearchFailure};
pub use links::{external_search_url, video_watch_url};
pub use msg::Msg;
pub use state::{AppState, ArticleResult, QueryState, RequestToken, VideoResult};
pub use update::update;
pub use view_model::{AppViewModel, QueryView};
