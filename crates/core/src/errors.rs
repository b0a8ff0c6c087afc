use thiserror::Error;

/// Unified error type for the portfolio-view-core library.
///
/// Only loading can fail. Every deriver is total over its input and
/// returns plain values.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input / File ────────────────────────────────────────────────
    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Settings ────────────────────────────────────────────────────
    #[error("Settings validation failed: {0}")]
    ValidationError(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
