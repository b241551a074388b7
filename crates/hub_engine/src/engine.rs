use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use hub_logging::{hub_debug, hub_info, hub_warn};
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, RequestToken, SearchBackend, SearchError};

/// Receives engine completions, typically forwarding them to the UI thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    SearchVideos { token: RequestToken, query: String },
    SearchArticles { token: RequestToken, query: String },
    Cancel { token: RequestToken },
}

type InFlight = Arc<Mutex<HashMap<RequestToken, CancellationToken>>>;

/// Runs searches on a background tokio runtime. Each search can be cancelled
/// by token; a cancelled search reports [`SearchError::Cancelled`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        backend: Arc<dyn SearchBackend>,
        sink: Arc<dyn EventSink>,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("hub-engine")
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let in_flight: InFlight = Arc::new(Mutex::new(HashMap::new()));

        thread::Builder::new()
            .name("hub-engine-commands".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    dispatch(&runtime, &backend, &sink, &in_flight, command);
                }
                hub_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn search_videos(&self, token: RequestToken, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::SearchVideos {
            token,
            query: query.into(),
        });
    }

    pub fn search_articles(&self, token: RequestToken, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::SearchArticles {
            token,
            query: query.into(),
        });
    }

    pub fn cancel(&self, token: RequestToken) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { token });
    }
}

fn dispatch(
    runtime: &tokio::runtime::Runtime,
    backend: &Arc<dyn SearchBackend>,
    sink: &Arc<dyn EventSink>,
    in_flight: &InFlight,
    command: EngineCommand,
) {
    match command {
        EngineCommand::Cancel { token } => {
            let cancelled = lock(in_flight).remove(&token);
            match cancelled {
                Some(cancel) => {
                    hub_info!("cancelling request {}", token);
                    cancel.cancel();
                }
                None => hub_debug!("request {} already finished", token),
            }
        }
        EngineCommand::SearchVideos { token, query } => {
            let cancel = register(in_flight, token);
            let backend = backend.clone();
            let sink = sink.clone();
            let in_flight = in_flight.clone();
            runtime.spawn(async move {
                let result = tokio::select! {
                    _ = cancel.cancelled() => Err(SearchError::Cancelled),
                    result = backend.search_videos(&query) => result,
                };
                finish(&in_flight, token, &result);
                sink.emit(EngineEvent::VideoSearchCompleted { token, result });
            });
        }
        EngineCommand::SearchArticles { token, query } => {
            let cancel = register(in_flight, token);
            let backend = backend.clone();
            let sink = sink.clone();
            let in_flight = in_flight.clone();
            runtime.spawn(async move {
                let result = tokio::select! {
                    _ = cancel.cancelled() => Err(SearchError::Cancelled),
                    result = backend.search_articles(&query) => result,
                };
                finish(&in_flight, token, &result);
                sink.emit(EngineEvent::ArticleSearchCompleted { token, result });
            });
        }
    }
}

fn register(in_flight: &InFlight, token: RequestToken) -> CancellationToken {
    let cancel = CancellationToken::new();
    lock(in_flight).insert(token, cancel.clone());
    cancel
}

fn finish<T>(in_flight: &InFlight, token: RequestToken, result: &Result<Vec<T>, SearchError>) {
    lock(in_flight).remove(&token);
    match result {
        Ok(items) => hub_info!("request {} finished with {} entries", token, items.len()),
        Err(SearchError::Cancelled) => hub_debug!("request {} cancelled", token),
        Err(err) => hub_warn!("request {} failed: {}", token, err),
    }
}

fn lock(
    in_flight: &InFlight,
) -> std::sync::MutexGuard<'_, HashMap<RequestToken, CancellationToken>> {
    // A poisoned map still holds valid tokens.
    in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
