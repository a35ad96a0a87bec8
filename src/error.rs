//! Error types for Tessa
//!
//! The path resolvers themselves are total and never fail; errors only
//! arise when reading the config file off disk.

use thiserror::Error;

/// Result type alias using Tessa's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Tessa
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
