//! ScaleScope engine: listing fetch, favorites storage and file output.
mod engine;
mod export;
mod favorites;
mod fetch;
mod persist;
mod types;

pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use export::{write_csv_export, ExportError, ExportSummary};
pub use favorites::{
    load_favorites, save_favorites, FavoritesStorage, JsonFileStorage, MemoryStorage,
    StorageError, FAVORITES_FILENAME,
};
pub use fetch::{FetchSettings, ListingSource, ReqwestFetcher};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError};
