use std::sync::{mpsc, Arc};
use std::thread;

use scope_logging::{scope_error, scope_warn};

use crate::fetch::{FetchSettings, ListingSource, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError};

/// Receiver of engine events. Called from the engine's runtime thread.
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
    FetchListing { url: String },
}

/// Handle to the background IO thread. Dropping it stops the thread once
/// in-flight work completes.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, sink: Arc<dyn EventSink>) -> Self {
        Self::with_source(Arc::new(ReqwestFetcher::new(settings)), sink)
    }

    pub fn with_source(source: Arc<dyn ListingSource>, sink: Arc<dyn EventSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    scope_error!("Failed to start engine runtime: {}", err);
                    fail_all(cmd_rx, sink.as_ref(), &err.to_string());
                    return;
                }
            };
            let mut tasks = Vec::new();
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let sink = sink.clone();
                tasks.push(runtime.spawn(async move {
                    handle_command(source.as_ref(), command, sink.as_ref()).await;
                }));
            }
            // In-flight fetches still report before the runtime is dropped.
            runtime.block_on(async move {
                for task in tasks {
                    let _ = task.await;
                }
            });
        });

        Self { cmd_tx }
    }

    pub fn fetch_listing(&self, url: impl Into<String>) {
        if self
            .cmd_tx
            .send(EngineCommand::FetchListing { url: url.into() })
            .is_err()
        {
            scope_warn!("Engine thread is gone; listing request dropped");
        }
    }
}

async fn handle_command(source: &dyn ListingSource, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::FetchListing { url } => {
            let result = source.fetch_listing(&url).await;
            sink.emit(EngineEvent::ListingFetched { result });
        }
    }
}

fn fail_all(cmd_rx: mpsc::Receiver<EngineCommand>, sink: &dyn EventSink, reason: &str) {
    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::FetchListing { .. } => sink.emit(EngineEvent::ListingFetched {
                result: Err(FetchError::new(FailureKind::Network, reason)),
            }),
        }
    }
}
