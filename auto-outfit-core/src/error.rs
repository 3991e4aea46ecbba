//! Error types for the auto-outfit core library.

use thiserror::Error;

/// Top-level error type for auto-outfit operations.
///
/// Only the save codec and configuration loading can fail. The gameplay
/// path reports skips through [`crate::AssignmentOutcome`] instead.
#[derive(Error, Debug)]
pub enum AutoOutfitError {
    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, AutoOutfitError>;
