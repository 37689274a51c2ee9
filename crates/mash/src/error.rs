//! Error types for the facade.

use mash_core::MashError;
use thiserror::Error;

/// Errors that can occur while loading or querying a Mash.
#[derive(Debug, Error)]
pub enum Error {
    /// Container error.
    #[error("mash error: {0}")]
    Mash(#[from] MashError),

    /// JSON parse or serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document's top level is not an object.
    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    /// The document nests deeper than the configured limit.
    #[error("document nesting depth {depth} exceeds limit {limit}")]
    TooDeep { depth: usize, limit: usize },
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
