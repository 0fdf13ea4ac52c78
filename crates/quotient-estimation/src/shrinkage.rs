//! Small-sample shrinkage: blend a chosen cohort's quantiles toward its
//! nearest available ancestor to control variance.

use quotient_core::constants::SHRINKAGE_K;
use quotient_core::pricing::PriorRecord;

/// Quantile triple after (or without) blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantiles {
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

impl Quantiles {
    /// The chosen prior's own quantiles, untouched. Used when no ancestor
    /// cohort exists anywhere up the chain.
    pub fn raw(prior: &PriorRecord) -> Self {
        Self {
            p10: prior.p10,
            p50: prior.p50,
            p90: prior.p90,
        }
    }
}

/// Blend `child` toward `parent` with weight `n / (n + K)` on the child.
///
/// A cohort with 50 deals sits exactly halfway; a large cohort keeps its
/// own quantiles nearly unchanged and a tiny one inherits the parent's.
pub fn shrink(child: &PriorRecord, parent: &PriorRecord) -> Quantiles {
    let n = child.sample_size as f64;
    let w = n / (n + SHRINKAGE_K);
    let blend = |child_q: f64, parent_q: f64| w * child_q + (1.0 - w) * parent_q;
    Quantiles {
        p10: blend(child.p10, parent.p10),
        p50: blend(child.p50, parent.p50),
        p90: blend(child.p90, parent.p90),
    }
}
