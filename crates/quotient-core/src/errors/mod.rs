//! Error types for the quotient workspace.
//!
//! One umbrella enum (`QuotientError`) plus per-domain sub-enums converted
//! via `#[from]`. All fallible public APIs return `QuotientResult<T>`.

mod storage_error;

pub use storage_error::StorageError;

/// Convenience alias used across the workspace.
pub type QuotientResult<T> = Result<T, QuotientError>;

/// Umbrella error for all quotient crates.
#[derive(Debug, thiserror::Error)]
pub enum QuotientError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
