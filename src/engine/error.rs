//! Engine error types

use thiserror::Error;

/// Engine-wide result type
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors raised by the conversion engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid pipeline options: {0}")]
    InvalidOptions(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<mupdf::Error> for EngineError {
    fn from(err: mupdf::Error) -> Self {
        EngineError::Pdf(err.to_string())
    }
}
