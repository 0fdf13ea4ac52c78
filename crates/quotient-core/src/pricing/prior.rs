use serde::{Deserialize, Serialize};

use super::bucket::PartsBucket;
use super::cohort::{CohortKey, Technology};

/// A numeric field as it arrives from the upstream aggregation job, which
/// emits numbers or stringified numbers depending on the export path.
/// This enum is the entire extent of that tolerance; nothing downstream
/// of [`RawPriorRow::normalize`] sees an unparsed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Parse to a finite f64, or `None`.
    pub fn as_finite(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// One untrusted prior row from the upstream aggregation job.
/// Validated into a [`PriorRecord`] by [`RawPriorRow::normalize`];
/// rows that fail validation are dropped wholesale, never patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPriorRow {
    pub technology: Option<String>,
    pub material: Option<String>,
    pub parts_bucket: Option<String>,
    pub n: Option<RawNumber>,
    pub p10: Option<RawNumber>,
    pub p50: Option<RawNumber>,
    pub p90: Option<RawNumber>,
}

impl RawPriorRow {
    /// Validate this row into a typed prior. `None` means the row is noise
    /// in the historical data and is silently excluded.
    ///
    /// Rules:
    /// - technology must be non-blank after trimming;
    /// - material is trimmed, blank collapses to `None`;
    /// - parts_bucket must be an exact bucket label, else `None`;
    /// - n/p10/p50/p90 must all parse to finite numbers;
    /// - n is floored to a non-negative integer.
    pub fn normalize(&self) -> Option<PriorRecord> {
        let technology = self.technology.as_deref().map(str::trim)?;
        if technology.is_empty() {
            return None;
        }

        let material = self
            .material
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        let parts_bucket = self
            .parts_bucket
            .as_deref()
            .and_then(PartsBucket::parse);

        let n = self.n.as_ref()?.as_finite()?;
        let p10 = self.p10.as_ref()?.as_finite()?;
        let p50 = self.p50.as_ref()?.as_finite()?;
        let p90 = self.p90.as_ref()?.as_finite()?;

        Some(PriorRecord {
            technology: Technology::from_raw(technology),
            material,
            parts_bucket,
            sample_size: n.max(0.0).floor() as u64,
            p10,
            p50,
            p90,
        })
    }
}

/// A validated, pre-aggregated price statistic for one cohort of similar
/// historical jobs. Quantile ordering (`p10 <= p50 <= p90`) is guaranteed
/// by the upstream aggregation, not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorRecord {
    pub technology: Technology,
    pub material: Option<String>,
    pub parts_bucket: Option<PartsBucket>,
    /// Number of historical deals summarized by this row.
    pub sample_size: u64,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

impl PriorRecord {
    /// The cohort this prior summarizes.
    pub fn cohort_key(&self) -> CohortKey {
        CohortKey::new(
            self.technology.clone(),
            self.material.clone(),
            self.parts_bucket,
        )
    }
}
