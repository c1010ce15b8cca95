//! Error types for the forecast pipeline.
//!
//! Three error families map to the three failure domains of a run:
//! - [`FetchError`]: network and HTTP failures while pulling source markup
//! - [`ExtractionError`]: fetched markup no longer has the shape an
//!   extractor expects (upstream markup drift)
//! - [`StoreError`]: the shared site store cannot be created, persisted,
//!   or removed
//!
//! Fetch and extraction errors are recovered per task: they are logged with
//! site/kind/URL context and recorded as an empty fragment, so one broken
//! source never takes down the sibling fetches. Store errors are fatal to
//! the run because no valid page can be produced without the store.

use thiserror::Error;

/// Errors that can occur while fetching source markup or resources.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Local I/O failed while writing a downloaded resource to disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when fetched markup no longer matches the expected shape.
///
/// These signal that the source site changed its page structure and the
/// extractor needs updating; the offending URL is attached by the caller
/// when the error is logged.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A structural element the extractor relies on is missing.
    #[error("expected element `{0}` not found in source markup")]
    ElementNotFound(&'static str),

    /// A tide day cell carries a rowspan attribute that is not a number.
    #[error("malformed rowspan attribute: {0:?}")]
    BadRowSpan(String),
}

/// Errors from the shared site store. Always fatal to the run.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing directory or file could not be created, written, or removed.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The store contents could not be serialized or deserialized.
    #[error("store serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
