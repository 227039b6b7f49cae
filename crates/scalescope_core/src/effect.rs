use crate::StartupEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the one listing request for this app lifetime.
    FetchListing,
    /// Write the full favorites snapshot back to durable storage.
    PersistFavorites(Vec<StartupEntry>),
    /// Write a CSV document for download.
    ExportCsv { filename: String, content: String },
}
