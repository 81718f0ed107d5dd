//! Reading exported rows and text inputs from disk.

use crate::article::RawArticle;
use crate::error::ExportResult;
use std::path::Path;

/// Read a JSON array of article rows (one object of row attributes each).
///
/// Entries that aren't row objects are logged and skipped; only a file
/// that isn't a JSON array fails as a whole.
pub fn read_rows<P: AsRef<Path>>(path: P) -> ExportResult<Vec<RawArticle>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let entries: Vec<serde_json::Value> = serde_json::from_str(&content)?;

    let mut rows = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<RawArticle>(entry) {
            Ok(row) => rows.push(row),
            Err(e) => log::warn!("Skipping row {}: {}", i + 1, e),
        }
    }

    log::debug!("Read {} rows from {}", rows.len(), path.as_ref().display());
    Ok(rows)
}

/// Read a whole text file, e.g. Moxfield's error output or an exported CSV
pub fn read_text<P: AsRef<Path>>(path: P) -> ExportResult<String> {
    Ok(std::fs::read_to_string(path.as_ref())?)
}
