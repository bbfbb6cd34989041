//! Error type shared by every stage of a scrape run

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can end a run early.
///
/// Missing cells inside a row are not errors: the extractor resolves them
/// to the `"N/A"` sentinel or skips the row.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The server answered with something other than 200
    #[error("error accessing {url}: status code {status}")]
    Status { url: String, status: u16 },

    /// The request never produced a response (DNS, TLS, timeout, body read)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("invalid value for {key}: {reason}")]
    Config { key: String, reason: String },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode or decode champion data: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }
}
