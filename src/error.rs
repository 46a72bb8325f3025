//! Error types for monoidahedron

use thiserror::Error;

/// Result type alias for monoidahedron operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in monoidahedron operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid tree shape: {0}")]
    InvalidTreeShape(String),

    #[error("Hierarchy depth limit exceeded: {limit}")]
    DepthExceeded { limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}
