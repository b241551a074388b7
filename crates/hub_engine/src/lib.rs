//! Finance hub engine: remote search clients and background execution.
mod article;
mod backend;
mod credentials;
mod engine;
mod error;
mod remote;
mod settings;
mod types;
mod video;

pub use article::{ArticleSearch, DEFAULT_TOPIC, MISSING_DESCRIPTION};
pub use backend::{ReqwestSearchBackend, SearchBackend};
pub use credentials::{ApiKey, ApiKeys};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use error::SearchError;
pub use remote::{RemoteSearch, SearchEndpoint, RESULT_CAP};
pub use settings::SearchSettings;
pub use types::{ArticleResult, EngineEvent, RequestToken, VideoResult};
pub use video::VideoSearch;
