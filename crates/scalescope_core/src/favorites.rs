use crate::StartupEntry;

/// Favorited entries, stored as full snapshots in insertion order.
///
/// Invariant: at most one entry per `name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoriteSet {
    entries: Vec<StartupEntry>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from persisted snapshots. Later duplicates of a name are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = StartupEntry>) -> Self {
        let mut set = Self::new();
        for entry in entries {
            if !set.is_favorite(&entry.name) {
                set.entries.push(entry);
            }
        }
        set
    }

    /// Removes the entry with the same name if present, otherwise adds the snapshot.
    /// Returns `true` when the entry is a favorite afterwards.
    pub fn toggle(&mut self, entry: &StartupEntry) -> bool {
        if let Some(pos) = self.position(&entry.name) {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push(entry.clone());
            true
        }
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn entries(&self) -> &[StartupEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}
