//! Error types for txtex library.

use std::io;
use thiserror::Error;

/// Result type alias for txtex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or rendering documents.
#[derive(Error, Debug)]
pub enum Error {
    /// The render configuration is invalid (zero font size, blank font family).
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A block carries a tag the renderer does not know.
    #[error("Unsupported block tag: {0}")]
    UnsupportedBlock(String),

    /// A block is missing the payload its tag requires.
    #[error("Malformed block: {0}")]
    MalformedBlock(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding a configuration or block list from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during rendering (serialization).
    #[error("Rendering error: {0}")]
    Render(String),
}
