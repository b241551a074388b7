use std::sync::{mpsc, Arc};

use hub_core::{ArticleResult, Effect, Msg, SearchFailure, VideoResult};
use hub_engine::{EngineEvent, EngineHandle, EventSink, SearchBackend, SearchError};
use hub_logging::hub_info;

use super::app::AppEvent;
use super::browser;

/// Executes effects produced by `update`: searches go to the engine, links to the browser.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        backend: Arc<dyn SearchBackend>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> std::io::Result<Self> {
        let engine = EngineHandle::new(backend, Arc::new(MsgSink { event_tx }))?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SearchVideos { token, query } => {
                    hub_info!("SearchVideos token={} query_len={}", token, query.len());
                    self.engine.search_videos(token, query);
                }
                Effect::SearchArticles { token, query } => {
                    hub_info!("SearchArticles token={} query={:?}", token, query);
                    self.engine.search_articles(token, query);
                }
                Effect::CancelSearch { token } => self.engine.cancel(token),
                Effect::OpenExternalSearch { title } => browser::open_external_search(&title),
                Effect::OpenUrl { url } => browser::open_url(&url),
            }
        }
    }
}

/// Turns engine completions into messages for the UI loop.
struct MsgSink {
    event_tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(AppEvent::Engine(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::VideoSearchCompleted { token, result } => Msg::VideoSearchFinished {
            token,
            result: result
                .map(|videos| videos.into_iter().map(map_video).collect())
                .map_err(map_failure),
        },
        EngineEvent::ArticleSearchCompleted { token, result } => Msg::ArticleSearchFinished {
            token,
            result: result
                .map(|articles| articles.into_iter().map(map_article).collect())
                .map_err(map_failure),
        },
    }
}

fn map_video(video: hub_engine::VideoResult) -> VideoResult {
    VideoResult {
        title: video.title,
        video_id: video.video_id,
    }
}

fn map_article(article: hub_engine::ArticleResult) -> ArticleResult {
    ArticleResult {
        title: article.title,
        description: article.description,
        url: article.url,
    }
}

fn map_failure(err: SearchError) -> SearchFailure {
    match err {
        SearchError::Validation => SearchFailure::EmptyQuery,
        SearchError::Config { .. } => SearchFailure::MissingApiKey,
        SearchError::Http { status, body } => SearchFailure::Http { status, body },
        SearchError::EmptyResult => SearchFailure::NoResults,
        other @ (SearchError::Network(_) | SearchError::Decode(_) | SearchError::Cancelled) => {
            SearchFailure::Other(other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_map_to_view_failures() {
        assert_eq!(map_failure(SearchError::Validation), SearchFailure::EmptyQuery);
        assert_eq!(
            map_failure(SearchError::Config { service: "YouTube" }),
            SearchFailure::MissingApiKey
        );
        assert_eq!(
            map_failure(SearchError::Http {
                status: 401,
                body: "bad key".to_string()
            }),
            SearchFailure::Http {
                status: 401,
                body: "bad key".to_string()
            }
        );
        assert_eq!(map_failure(SearchError::EmptyResult), SearchFailure::NoResults);
        assert_eq!(
            map_failure(SearchError::Network("connection refused".to_string())),
            SearchFailure::Other("network error: connection refused".to_string())
        );
    }

    #[test]
    fn completed_video_search_becomes_finished_msg() {
        let msg = map_event(EngineEvent::VideoSearchCompleted {
            token: 4,
            result: Ok(vec![hub_engine::VideoResult {
                title: "ETF basics".to_string(),
                video_id: "abc".to_string(),
            }]),
        });

        assert_eq!(
            msg,
            Msg::VideoSearchFinished {
                token: 4,
                result: Ok(vec![VideoResult {
                    title: "ETF basics".to_string(),
                    video_id: "abc".to_string(),
                }]),
            }
        );
    }

    #[test]
    fn failed_article_search_becomes_finished_msg() {
        let msg = map_event(EngineEvent::ArticleSearchCompleted {
            token: 9,
            result: Err(SearchError::EmptyResult),
        });

        assert_eq!(
            msg,
            Msg::ArticleSearchFinished {
                token: 9,
                result: Err(SearchFailure::NoResults),
            }
        );
    }
}
