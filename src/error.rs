//! Error types shared by the backend, the API seam and configuration.

/// Crate error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The chat API rejected or failed a request.
    #[error("api error: {0}")]
    Api(String),

    /// The requested object does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
