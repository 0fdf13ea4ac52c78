use serde::{Deserialize, Serialize};

use crate::pricing::{ConfidenceBand, SourceLevel};

/// A price-range estimate for a prospective job.
///
/// Quantiles are in the upstream aggregation's currency unit; formatting
/// and any decision about showing `confidence`/`source` to end users
/// belong to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// 10% of comparable historical jobs priced below this.
    pub p10: f64,
    /// Median historical price.
    pub p50: f64,
    /// 90% of comparable historical jobs priced below this.
    pub p90: f64,
    /// Reliability band of the chosen cohort (pre-blend sample size).
    pub confidence: ConfidenceBand,
    /// Aggregation level the chosen cohort came from.
    pub source: SourceLevel,
}
