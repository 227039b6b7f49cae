use std::path::PathBuf;
use std::sync::{mpsc, Arc};

use scalescope_core::{Effect, ErrorState, Msg};
use scalescope_engine::{
    save_favorites, write_csv_export, EngineEvent, EngineHandle, EventSink, FavoritesStorage,
};
use scope_logging::{scope_error, scope_info, scope_warn};

use super::app::Input;

/// Forwards engine events into the app's input queue as core messages.
pub struct InputSink {
    tx: mpsc::Sender<Input>,
}

impl InputSink {
    pub fn new(tx: mpsc::Sender<Input>) -> Self {
        Self { tx }
    }
}

impl EventSink for InputSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(Input::Msg(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListingFetched { result: Ok(entries) } => Msg::ListingLoaded(entries),
        EngineEvent::ListingFetched { result: Err(err) } => {
            scope_warn!("Listing fetch failed: {}", err);
            Msg::ListingFailed(ErrorState::classify(err.http_status()))
        }
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
    storage: Arc<dyn FavoritesStorage>,
    endpoint: String,
    export_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        storage: Arc<dyn FavoritesStorage>,
        endpoint: String,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            engine,
            storage,
            endpoint,
            export_dir,
        }
    }

    /// Executes effects in order. Returns one-line notices for the user.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<String> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchListing => {
                    scope_info!("FetchListing endpoint={}", self.endpoint);
                    self.engine.fetch_listing(self.endpoint.clone());
                }
                Effect::PersistFavorites(snapshot) => {
                    // Failures are logged inside; the in-memory toggle stands.
                    save_favorites(self.storage.as_ref(), &snapshot);
                }
                Effect::ExportCsv { filename, content } => {
                    match write_csv_export(&self.export_dir, &filename, &content) {
                        Ok(summary) => notices.push(format!(
                            "Exported {} rows to {} ({})",
                            summary.row_count,
                            summary.path.display(),
                            summary.mime_type
                        )),
                        Err(err) => {
                            scope_error!("Export to {:?} failed: {}", self.export_dir, err);
                            notices.push(format!("Export failed: {err}"));
                        }
                    }
                }
            }
        }
        notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalescope_core::StartupEntry;
    use scalescope_engine::{FailureKind, FetchError, FetchSettings, MemoryStorage};
    use std::time::Duration;
    use tempfile::TempDir;

    fn runner(
        endpoint: &str,
        storage: Arc<MemoryStorage>,
        export_dir: PathBuf,
    ) -> (EffectRunner, mpsc::Receiver<Input>) {
        let (tx, rx) = mpsc::channel();
        let engine = EngineHandle::new(FetchSettings::default(), Arc::new(InputSink::new(tx)));
        let runner = EffectRunner::new(engine, storage, endpoint.to_string(), export_dir);
        (runner, rx)
    }

    #[test]
    fn rate_limit_event_maps_to_rate_limited() {
        let event = EngineEvent::ListingFetched {
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(429),
                message: "429 Too Many Requests".to_string(),
            }),
        };
        assert_eq!(map_event(event), Msg::ListingFailed(ErrorState::RateLimited));
    }

    #[test]
    fn listing_event_maps_to_loaded() {
        let entries = vec![StartupEntry::new("A", "Dev", 1)];
        let event = EngineEvent::ListingFetched {
            result: Ok(entries.clone()),
        };
        assert_eq!(map_event(event), Msg::ListingLoaded(entries));
    }

    #[test]
    fn fetch_effect_round_trips_through_engine() {
        let temp = TempDir::new().unwrap();
        let (runner, rx) = runner(
            "not a url",
            Arc::new(MemoryStorage::new()),
            temp.path().to_path_buf(),
        );

        let notices = runner.run(vec![Effect::FetchListing]);
        assert!(notices.is_empty());

        match rx.recv_timeout(Duration::from_secs(5)).expect("engine reply") {
            Input::Msg(msg) => assert_eq!(msg, Msg::ListingFailed(ErrorState::FetchFailed)),
            _ => panic!("expected a core message"),
        }
    }

    #[test]
    fn persist_effect_writes_snapshot() {
        let temp = TempDir::new().unwrap();
        let storage = Arc::new(MemoryStorage::new());
        let (runner, _rx) = runner("not a url", storage.clone(), temp.path().to_path_buf());
        let snapshot = vec![StartupEntry::new("B", "Dev", 20)];

        runner.run(vec![Effect::PersistFavorites(snapshot.clone())]);

        assert_eq!(storage.load().unwrap(), snapshot);
    }

    #[test]
    fn export_effect_reports_written_file() {
        let temp = TempDir::new().unwrap();
        let (runner, _rx) = runner(
            "not a url",
            Arc::new(MemoryStorage::new()),
            temp.path().to_path_buf(),
        );

        let notices = runner.run(vec![Effect::ExportCsv {
            filename: "startups.csv".to_string(),
            content: "Name,Category,Votes\nA,Dev,1".to_string(),
        }]);

        assert_eq!(notices.len(), 1);
        assert!(notices[0].starts_with("Exported 1 rows"));
        assert!(notices[0].ends_with("(text/csv)"));
        assert!(temp.path().join("startups.csv").is_file());
    }
}
