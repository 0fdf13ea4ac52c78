//! Tracing-backed observer for the store-backed engine.

use tracing::{debug, warn};

use quotient_core::errors::QuotientError;
use quotient_core::pricing::{CohortKey, SourceLevel};
use quotient_core::traits::IEstimateObserver;

/// Logs every swallowed lookup failure through `tracing`. The error text
/// carries the SQLite message, so "no such table" and transient query
/// failures stay distinguishable in logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl IEstimateObserver for TracingObserver {
    fn fetch_failed(&self, key: &CohortKey, level: SourceLevel, error: &QuotientError) {
        warn!(%key, %level, %error, "prior lookup failed; treating as missing row");
    }

    fn feature_unsupported(&self, error: Option<&QuotientError>) {
        match error {
            Some(error) => warn!(%error, "priors capability check failed; skipping estimate"),
            None => debug!("priors feature not present in backing store"),
        }
    }
}
