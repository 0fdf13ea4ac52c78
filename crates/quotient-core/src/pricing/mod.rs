//! Domain types for price estimation: cohort keys, buckets, priors,
//! confidence bands, and aggregation levels.

mod bucket;
mod cohort;
mod confidence;
mod prior;
mod source;

pub use bucket::PartsBucket;
pub use cohort::{CohortKey, Technology};
pub use confidence::ConfidenceBand;
pub use prior::{PriorRecord, RawNumber, RawPriorRow};
pub use source::SourceLevel;
