//! Error types for the layout reconstruction library.
//!
//! The layout stages themselves never fail: degenerate input degrades to
//! fallback values. Errors only arise at the boundaries, when loading
//! fragment documents or configuration and when rendering output.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading input or rendering output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A tuning parameter is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Fragment input is structurally unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
