//! Error Types
//!
//! Failures the controller recovers from locally. None of these reach
//! the caller of a controller operation; they are logged and absorbed.

use thiserror::Error;

/// Result type for key-value store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by a key-value store back-end
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The store cannot be reached at all (no window, storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The store rejected the operation (quota exceeded, security error)
    #[error("storage rejected operation: {0}")]
    Rejected(String),
}

/// Controller-level error taxonomy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    /// Snapshot could not be read or decoded; defaults are used instead
    #[error("failed to read snapshot '{key}': {reason}")]
    PersistenceRead { key: String, reason: String },
    /// Snapshot could not be written; state stays in memory only
    #[error("failed to write snapshot '{key}': {reason}")]
    PersistenceWrite { key: String, reason: String },
    /// A deep-link target is not in the collection
    #[error("no item with id {0}")]
    LookupMiss(String),
}
