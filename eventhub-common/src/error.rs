//! Common error types for EventHub
//!
//! Routine lookup misses are not errors: catalog and query operations
//! return `Option`/empty results for those. The variants here cover the
//! load path, where bad catalog data must fail startup.

use thiserror::Error;

/// Common result type for EventHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while loading or validating catalog data
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading a catalog or config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data could not be parsed
    #[error("Invalid catalog data: {0}")]
    Data(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two records carry (or normalized to) the same event code
    #[error("Duplicate event code in catalog: {0}")]
    DuplicateEventCode(String),

    /// A catalog record failed a structural check
    #[error("Invalid catalog record {code}: {reason}")]
    InvalidRecord { code: String, reason: String },
}
