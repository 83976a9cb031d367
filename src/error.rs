//! Error types for the market intelligence synthesis engine

use thiserror::Error;

/// Result type alias for synthesis operations
pub type Result<T> = std::result::Result<T, SynthesisError>;

#[derive(Error, Debug)]
pub enum SynthesisError {

    // =============================
    // Core Pipeline Errors
    // =============================

    #[error("Generation failure: {0}")]
    Generation(String),

    #[error("Parse failure: {0}")]
    Parse(String),

    #[error("Misaligned price-history series: {0}")]
    MisalignedSeries(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
