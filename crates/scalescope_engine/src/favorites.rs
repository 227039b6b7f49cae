//! Favorites storage port and its implementations.
//!
//! Favorites are persisted as a JSON array of full entry snapshots in a single
//! named slot. Loading never fails from the caller's point of view: a missing
//! or unreadable slot degrades to an empty set.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use scalescope_core::StartupEntry;
use scope_logging::{scope_debug, scope_error, scope_info, scope_warn};
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

pub const FAVORITES_FILENAME: &str = "favorites.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed favorites data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

pub trait FavoritesStorage: Send + Sync {
    /// Reads the persisted favorites. A missing slot is `Ok` with no entries.
    fn load(&self) -> Result<Vec<StartupEntry>, StorageError>;
    /// Replaces the persisted favorites with `entries`.
    fn save(&self, entries: &[StartupEntry]) -> Result<(), StorageError>;
}

/// Favorites kept in `{dir}/{filename}`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
    filename: String,
}

impl JsonFileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self::with_filename(dir, FAVORITES_FILENAME)
    }

    pub fn with_filename(dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            dir,
            filename: filename.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }
}

impl FavoritesStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<StartupEntry>, StorageError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                scope_debug!("No favorites at {:?}", path);
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, entries: &[StartupEntry]) -> Result<(), StorageError> {
        let content = serde_json::to_vec(entries)?;
        AtomicFileWriter::new(self.dir.clone()).write(&self.filename, &content)?;
        Ok(())
    }
}

/// In-memory slot holding the same serialized form as the file store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with raw text, as if another session had written it.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl FavoritesStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<StartupEntry>, StorageError> {
        match self.raw() {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[StartupEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| io::Error::other("favorites slot poisoned"))?;
        *slot = Some(raw);
        Ok(())
    }
}

/// Loads favorites, falling back to an empty list on any storage error.
pub fn load_favorites(storage: &dyn FavoritesStorage) -> Vec<StartupEntry> {
    match storage.load() {
        Ok(entries) => {
            scope_info!("Loaded {} favorites", entries.len());
            entries
        }
        Err(err) => {
            scope_warn!("Ignoring persisted favorites: {}", err);
            Vec::new()
        }
    }
}

/// Saves favorites and logs failures. Returns whether the write succeeded.
pub fn save_favorites(storage: &dyn FavoritesStorage, entries: &[StartupEntry]) -> bool {
    match storage.save(entries) {
        Ok(()) => {
            scope_debug!("Persisted {} favorites", entries.len());
            true
        }
        Err(err) => {
            scope_error!("Failed to persist favorites: {}", err);
            false
        }
    }
}
