use crate::config::ConfigError;
use thiserror::Error;

/// Errors from the edges of the crate: config files, JSON input, I/O.
/// Parsing, scaling, formatting and consolidation themselves never fail.
#[derive(Debug, Error)]
pub enum LarderError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
