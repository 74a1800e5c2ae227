//! Error types for mega menu configuration and rendering

use thiserror::Error;

/// Main error type for mega menu operations
#[derive(Error, Debug)]
pub enum MegaMenuError {
    #[error("Link '{0}' not found in mega menu configuration")]
    LinkNotFound(String),

    #[error("Block '{1}' not found under link '{0}'")]
    BlockNotFound(String, String),

    #[error("Block '{1}' already exists under link '{0}'")]
    DuplicateBlock(String, String),

    #[error("Layout '{0}' is not registered")]
    LayoutNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for mega menu operations
pub type MegaMenuResult<T> = Result<T, MegaMenuError>;
