use std::path::{Path, PathBuf};

use scalescope_core::CSV_MIME_TYPE;
use scope_logging::scope_info;

use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub row_count: usize,
    pub mime_type: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export filename must be a plain file name, got {0:?}")]
    InvalidFilename(String),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Writes a rendered CSV document into `dir` under `filename`.
pub fn write_csv_export(
    dir: &Path,
    filename: &str,
    content: &str,
) -> Result<ExportSummary, ExportError> {
    let is_plain = Path::new(filename)
        .file_name()
        .is_some_and(|name| name == filename);
    if !is_plain {
        return Err(ExportError::InvalidFilename(filename.to_string()));
    }

    let writer = AtomicFileWriter::new(dir.to_path_buf());
    let path = writer.write(filename, content.as_bytes())?;
    // First line is the header.
    let row_count = content.lines().skip(1).count();
    scope_info!("Exported {} rows to {:?}", row_count, path);

    Ok(ExportSummary {
        path,
        row_count,
        mime_type: CSV_MIME_TYPE,
    })
}
