//! Error types for the pagemd library.

use std::io;
use thiserror::Error;

/// Result type alias for pagemd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. The text-shaping stages themselves never fail; these come
/// from configuration and from (de)serializing the page model.
#[derive(Error, Debug)]
pub enum Error {
    /// An option value is out of range. Raised before any stage runs.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The page model or options JSON could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A non-fatal failure of a single page, reported by the extractor.
///
/// The pipeline renders it as an inline marker and carries on with the
/// remaining pages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Page {page}: {reason}")]
pub struct PageError {
    /// 1-indexed page number
    pub page: usize,
    /// Human-readable reason
    pub reason: String,
}

impl PageError {
    /// Create a new page error.
    pub fn new(page: usize, reason: impl Into<String>) -> Self {
        Self {
            page,
            reason: reason.into(),
        }
    }
}
