//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while configuring the extractor or loading pages
///
/// None of these abort a batch: a page that fails to load becomes an
/// `ExtractionOutcome::Failure` for its link.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Network or transport error while loading a page
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status {
        /// Response status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ExtractorError {
    fn from(e: reqwest::Error) -> Self {
        ExtractorError::Fetch(e.to_string())
    }
}
