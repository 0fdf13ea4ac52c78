use std::sync::Arc;

use crate::errors::QuotientResult;
use crate::pricing::{CohortKey, PriorRecord};

/// Point-lookup access to pre-aggregated priors.
///
/// Contract:
/// - `fetch_prior` returns at most one row per key; `None` dimensions in
///   the key match only rows explicitly marked null, never "any".
/// - `priors_supported` answers whether the priors feature exists at all
///   in the backing schema. Engines call it before any per-key fetch and
///   short-circuit on `false` — a missing feature is not the same thing
///   as a key with no row.
pub trait IPriorStore: Send + Sync {
    fn priors_supported(&self) -> QuotientResult<bool>;

    fn fetch_prior(&self, key: &CohortKey) -> QuotientResult<Option<PriorRecord>>;
}

/// Blanket impl: `Arc<T>` implements `IPriorStore` by delegating to the inner
/// `T`. Lets an `Arc`-wrapped store be used transparently wherever an
/// `IPriorStore` is required (e.g. keeping a handle after the engine takes it).
impl<T: IPriorStore + ?Sized> IPriorStore for Arc<T> {
    fn priors_supported(&self) -> QuotientResult<bool> {
        (**self).priors_supported()
    }

    fn fetch_prior(&self, key: &CohortKey) -> QuotientResult<Option<PriorRecord>> {
        (**self).fetch_prior(key)
    }
}
