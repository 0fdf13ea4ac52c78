//! # quotient-core
//!
//! Foundation crate for the quotient price estimation system.
//! Defines all types, traits, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod constants;
pub mod errors;
pub mod models;
pub mod pricing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{QuotientError, QuotientResult};
pub use models::{EstimateRequest, PriceEstimate};
pub use pricing::{
    CohortKey, ConfidenceBand, PartsBucket, PriorRecord, RawPriorRow, SourceLevel, Technology,
};
