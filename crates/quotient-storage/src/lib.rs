//! # quotient-storage
//!
//! SQLite-backed store of pre-aggregated pricing priors. The table is
//! populated by the upstream aggregation job; this crate serves equality
//! point lookups to the estimation engine and exposes a capability check
//! so engines can tell "feature absent" from "row absent".

pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::StorageEngine;

use quotient_core::errors::{QuotientError, StorageError};

/// Name of the priors table provisioned by migrations (or by the upstream
/// job, when attaching to a database this crate does not own).
pub const PRIORS_TABLE: &str = "pricing_priors";

pub(crate) fn to_storage_err(message: String) -> QuotientError {
    QuotientError::Storage(StorageError::SqliteError { message })
}
