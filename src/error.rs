//! Error types for magick-fieldgen
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Malformed record shapes are not errors; they are skipped by the record
//! extractor with a warning.

use thiserror::Error;

/// The main error type for magick-fieldgen
#[derive(Error, Debug)]
pub enum Error {
    /// Input was not valid JSON, or decoded to the `null` literal.
    ///
    /// The display text is fixed; the underlying cause is kept for logging.
    #[error("JSON Decode Error!")]
    Decode { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for magick-fieldgen
pub type Result<T> = std::result::Result<T, Error>;
