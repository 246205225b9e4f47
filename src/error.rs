//! Error types for the reading engine.

use thiserror::Error;

/// Result type alias for reading-engine operations
pub type Result<T> = std::result::Result<T, RapidReadError>;

/// Errors that can occur while importing an article.
///
/// Only the ingestion pipeline produces errors. Text extraction degrades
/// gracefully on malformed HTML, and the playback state machine validates its
/// inputs internally, so neither has an error path.
#[derive(Error, Debug)]
pub enum RapidReadError {
    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Fetching the raw page failed (single attempt, no retry)
    #[error("Failed to fetch page: {0}")]
    Fetch(String),

    /// Fetched bytes were not decodable as UTF-8 text
    #[error("Fetched content is not valid UTF-8 text")]
    DecodeFailed,

    /// No extraction backend produced usable content
    #[error("No readable content found in document")]
    NoContent,
}
