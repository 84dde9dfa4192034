//! Registry error types.

use thiserror::Error;

/// Errors surfaced from profile-registry mutations.
///
/// Data-source problems never appear here: a missing or unreadable source
/// degrades to an empty collection at load time instead.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Selecting or deleting an unknown profile id
    #[error("profile not found: {0}")]
    NotFound(String),

    /// Built-in profiles cannot be deleted
    #[error("profile is built-in and cannot be deleted: {0}")]
    BuiltinImmutable(String),

    /// Filesystem error while persisting the registry or copying sources
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted registry document failed to serialize
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
