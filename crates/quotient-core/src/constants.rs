/// Quotient system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shrinkage prior strength. A cohort with `n` historical deals is blended
/// toward its parent with weight `n / (n + SHRINKAGE_K)`, so a cohort needs
/// 50 deals before its own quantiles and the parent's count equally.
pub const SHRINKAGE_K: f64 = 50.0;

/// Upper bound on point lookups per estimate in the store-backed engine:
/// five fallback steps plus four ancestor steps, each walked at most once.
pub const MAX_LOOKUPS_PER_ESTIMATE: usize = 9;
