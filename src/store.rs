//! JSON persistence for a [`ResultSet`]
//!
//! The document is encoded fully in memory, written to a temporary file in
//! the target directory and renamed over the destination, so readers see
//! either the previous file or the complete new one.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ScrapeError;
use crate::extractors::ResultSet;

/// Pretty JSON with four-space indentation; non-ASCII is written as-is
pub fn to_pretty_json(results: &ResultSet) -> Result<Vec<u8>, ScrapeError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    results.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write `results` to `path`, replacing any existing file
pub fn save_results(results: &ResultSet, path: &Path) -> Result<(), ScrapeError> {
    let bytes = to_pretty_json(results)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ScrapeError::io(dir, e))?;
    tmp.write_all(&bytes).map_err(|e| ScrapeError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| ScrapeError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| ScrapeError::io(path, e.error))?;

    debug!(path = %path.display(), bytes = bytes.len(), "saved champion data");
    Ok(())
}

/// Read a document previously written by [`save_results`]
pub fn load_results(path: &Path) -> Result<ResultSet, ScrapeError> {
    let raw = fs::read(path).map_err(|e| ScrapeError::io(path, e))?;
    Ok(serde_json::from_slice(&raw)?)
}
