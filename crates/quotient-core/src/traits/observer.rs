use crate::errors::QuotientError;
use crate::pricing::{CohortKey, SourceLevel};

/// Caller-injected hook for diagnostic events in the store-backed engine.
///
/// The engine treats a failed point lookup as an absent row and keeps
/// walking — results never depend on this trait. Observers exist so that
/// fail-soft behavior is visible to operators: every swallowed error is
/// reported here with the key and level it happened at.
pub trait IEstimateObserver: Send + Sync {
    /// A per-key fetch failed and will be treated as a miss.
    fn fetch_failed(&self, _key: &CohortKey, _level: SourceLevel, _error: &QuotientError) {}

    /// The pre-flight capability check reported the priors feature absent
    /// (or itself failed). The estimate short-circuits with no fetches.
    fn feature_unsupported(&self, _error: Option<&QuotientError>) {}
}

/// Default observer: ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IEstimateObserver for NoopObserver {}
