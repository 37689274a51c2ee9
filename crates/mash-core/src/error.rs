//! Error types for Mash Core.

use thiserror::Error;

use crate::types::Key;

/// Errors raised by container operations.
///
/// Absence is normally a value-producing condition resolved through the
/// container's default. The only failing read is `fetch` without a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MashError {
    #[error("key not found: {0}")]
    KeyNotFound(Key),
}

/// Result type for container operations.
pub type Result<T> = std::result::Result<T, MashError>;
