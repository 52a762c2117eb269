//! # Processing Error Types Module
//!
//! Errors for the layer around the parser: loading recipe files, decoding
//! recipe JSON and running batch workers. Parsing an ingredient string never
//! produces one of these.

/// Custom error types for recipe processing
#[derive(Debug)]
pub enum ProcessingError {
    /// Reading a recipe file failed
    Io(std::io::Error),
    /// Recipe JSON could not be decoded
    Json(serde_json::Error),
    /// Recipe input had an unsupported shape
    InvalidRecipe(String),
    /// A batch worker task failed to complete
    Worker(String),
    /// Invalid processor configuration
    Config(String),
}

impl std::fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingError::Io(err) => write!(f, "I/O error: {err}"),
            ProcessingError::Json(err) => write!(f, "JSON error: {err}"),
            ProcessingError::InvalidRecipe(msg) => write!(f, "Invalid recipe: {msg}"),
            ProcessingError::Worker(msg) => write!(f, "Worker error: {msg}"),
            ProcessingError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Io(err) => Some(err),
            ProcessingError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProcessingError {
    fn from(err: std::io::Error) -> Self {
        ProcessingError::Io(err)
    }
}

impl From<serde_json::Error> for ProcessingError {
    fn from(err: serde_json::Error) -> Self {
        ProcessingError::Json(err)
    }
}

impl From<tokio::task::JoinError> for ProcessingError {
    fn from(err: tokio::task::JoinError) -> Self {
        ProcessingError::Worker(err.to_string())
    }
}

impl From<tokio::sync::AcquireError> for ProcessingError {
    fn from(err: tokio::sync::AcquireError) -> Self {
        ProcessingError::Worker(format!("concurrency limiter closed: {err}"))
    }
}
