//! Error types for feature export

use thiserror::Error;

/// Errors that can occur while configuring or writing feature tables
///
/// Parsing and feature derivation never fail; unparseable dates degrade to
/// `CalendarValue::Absent`.
#[derive(Error, Debug)]
pub enum FeatureError {
    /// Writing the table failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
