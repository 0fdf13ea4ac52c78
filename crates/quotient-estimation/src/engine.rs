//! Estimate orchestration: cohort selection, one ancestor walk, shrinkage,
//! confidence banding.
//!
//! Both entry points run the same resolver over a lookup closure; they
//! differ only in where a cohort key's prior comes from.

use tracing::{debug, info};

use quotient_core::models::{EstimateRequest, PriceEstimate};
use quotient_core::pricing::{
    CohortKey, ConfidenceBand, PartsBucket, PriorRecord, RawPriorRow, SourceLevel,
};
use quotient_core::traits::{IEstimateObserver, IPriorStore, NoopObserver};

use crate::index::PriorIndex;
use crate::ladder;
use crate::shrinkage::{self, Quantiles};

/// Walk the fallback plan, pick the first cohort with data, blend it
/// toward its nearest available ancestor, and band confidence from the
/// chosen cohort's sample size.
///
/// `lookup` is called at most once per distinct step: up to five plan
/// steps (stopping at the first hit), then up to four ancestor steps
/// (stopping at the first hit). `None` means no cohort anywhere down to
/// global had data — a definitive "no estimate", not an error.
fn resolve_with<F>(request: &EstimateRequest, mut lookup: F) -> Option<PriceEstimate>
where
    F: FnMut(SourceLevel, &CohortKey) -> Option<PriorRecord>,
{
    let technology = request
        .technology
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let material = request
        .material
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());
    let bucket = request.parts_count.and_then(PartsBucket::from_count);

    let plan = ladder::build_plan(technology, material, bucket);

    let mut chosen: Option<(SourceLevel, PriorRecord)> = None;
    for step in &plan {
        if let Some(prior) = lookup(step.level, &step.key) {
            chosen = Some((step.level, prior));
            break;
        }
    }
    let (level, prior) = chosen?;

    // One non-compounding walk up the static parent chain; the first
    // ancestor with data is the only blending parent.
    let mut parent: Option<PriorRecord> = None;
    let mut cursor = level.parent();
    while let Some(parent_level) = cursor {
        if let Some(key) = ladder::key_for_level(parent_level, technology, material, bucket) {
            if let Some(found) = lookup(parent_level, &key) {
                parent = Some(found);
                break;
            }
        }
        cursor = parent_level.parent();
    }

    let quantiles = match &parent {
        Some(parent) => shrinkage::shrink(&prior, parent),
        None => Quantiles::raw(&prior),
    };

    Some(PriceEstimate {
        p10: quantiles.p10,
        p50: quantiles.p50,
        p90: quantiles.p90,
        confidence: ConfidenceBand::from_sample_size(prior.sample_size),
        source: level,
    })
}

/// Pure estimation over a snapshot of raw prior rows.
///
/// Normalizes all rows up front, then resolves against the in-memory
/// index. Synchronous, side-effect-free, and deterministic: identical
/// inputs produce bit-identical output.
pub fn estimate_from_rows(
    rows: &[RawPriorRow],
    request: &EstimateRequest,
) -> Option<PriceEstimate> {
    let index = PriorIndex::from_rows(rows);
    resolve_with(request, |_, key| index.get(key).cloned())
}

/// Store-backed estimation engine.
///
/// Issues one point lookup per step, strictly sequentially, stopping at
/// the first hit on both the fallback walk and the ancestor walk. A
/// failed lookup is reported to the injected observer and treated as an
/// absent row; the walk continues.
pub struct EstimationEngine<S: IPriorStore> {
    store: S,
    observer: Box<dyn IEstimateObserver>,
}

impl<S: IPriorStore> EstimationEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            observer: Box::new(NoopObserver),
        }
    }

    /// Replace the default no-op observer.
    pub fn with_observer(mut self, observer: Box<dyn IEstimateObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Estimate a price range for the request, or `None` when the priors
    /// feature is unsupported or no cohort down to global has data.
    pub fn estimate(&self, request: &EstimateRequest) -> Option<PriceEstimate> {
        match self.store.priors_supported() {
            Ok(true) => {}
            Ok(false) => {
                debug!("priors feature not present in backing store");
                self.observer.feature_unsupported(None);
                return None;
            }
            Err(error) => {
                self.observer.feature_unsupported(Some(&error));
                return None;
            }
        }

        let result = resolve_with(request, |level, key| {
            match self.store.fetch_prior(key) {
                Ok(row) => row,
                Err(error) => {
                    // Fail-soft: an errored lookup is indistinguishable from
                    // a missing row for selection purposes. The observer is
                    // the place where the difference stays visible.
                    self.observer.fetch_failed(key, level, &error);
                    None
                }
            }
        });

        match &result {
            Some(estimate) => info!(
                source = %estimate.source,
                confidence = %estimate.confidence,
                "estimate resolved"
            ),
            None => debug!("no cohort had data, down to global"),
        }
        result
    }
}
