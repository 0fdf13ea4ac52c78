//! Fallback planning: the ordered list of cohorts to try for a request,
//! most specific first.

use serde::{Deserialize, Serialize};

use quotient_core::pricing::{CohortKey, PartsBucket, SourceLevel, Technology};

/// One rung of the fallback walk: the level it represents and the concrete
/// cohort key to look up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackStep {
    pub level: SourceLevel,
    pub key: CohortKey,
}

/// Fallback order, most specific first. `tech+mat` outranks `tech+parts`:
/// material narrows price far more than quantity does.
const LADDER: [SourceLevel; 5] = [
    SourceLevel::TechMatParts,
    SourceLevel::TechMat,
    SourceLevel::TechParts,
    SourceLevel::Tech,
    SourceLevel::Global,
];

/// Build the concrete key for one level out of the request dimensions.
/// `None` when the level needs a dimension the request doesn't have.
pub fn key_for_level(
    level: SourceLevel,
    technology: Option<&str>,
    material: Option<&str>,
    bucket: Option<PartsBucket>,
) -> Option<CohortKey> {
    let named = |t: &str| Technology::Named(t.to_string());
    match level {
        SourceLevel::TechMatParts => Some(CohortKey::new(
            named(technology?),
            Some(material?.to_string()),
            Some(bucket?),
        )),
        SourceLevel::TechMat => Some(CohortKey::new(
            named(technology?),
            Some(material?.to_string()),
            None,
        )),
        SourceLevel::TechParts => Some(CohortKey::new(named(technology?), None, Some(bucket?))),
        SourceLevel::Tech => Some(CohortKey::new(named(technology?), None, None)),
        SourceLevel::Global => Some(CohortKey::global()),
    }
}

/// Build the fallback plan for a request. Levels whose dimensions are
/// missing are skipped; steps collapsing to an identical `(level, key)`
/// pair are de-duplicated preserving first occurrence. With no technology
/// at all, only the global step remains.
pub fn build_plan(
    technology: Option<&str>,
    material: Option<&str>,
    bucket: Option<PartsBucket>,
) -> Vec<FallbackStep> {
    let technology = technology.map(str::trim).filter(|t| !t.is_empty());
    let material = material.map(str::trim).filter(|m| !m.is_empty());

    let mut plan: Vec<FallbackStep> = Vec::with_capacity(LADDER.len());
    for level in LADDER {
        if let Some(key) = key_for_level(level, technology, material, bucket) {
            let step = FallbackStep { level, key };
            if !plan.contains(&step) {
                plan.push(step);
            }
        }
    }
    plan
}
