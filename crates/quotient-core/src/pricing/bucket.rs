use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal part-count bucket. Historical priors are aggregated per bucket
/// rather than per exact quantity so that sparse quantities share a cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartsBucket {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2-3")]
    TwoToThree,
    #[serde(rename = "4-10")]
    FourToTen,
    #[serde(rename = "11+")]
    ElevenPlus,
}

impl PartsBucket {
    /// Classify a raw part count into a bucket.
    ///
    /// Non-finite, non-positive, and in-between fractional counts (e.g. 3.5)
    /// classify as `None`: the quantity is excluded from bucket-specific
    /// cohorts but still participates in technology-level estimation.
    pub fn from_count(count: f64) -> Option<Self> {
        if !count.is_finite() || count <= 0.0 {
            return None;
        }
        if count == 1.0 {
            Some(Self::One)
        } else if (2.0..=3.0).contains(&count) {
            Some(Self::TwoToThree)
        } else if (4.0..=10.0).contains(&count) {
            Some(Self::FourToTen)
        } else if count >= 11.0 {
            Some(Self::ElevenPlus)
        } else {
            None
        }
    }

    /// Parse the exact wire label. Anything else is `None` — a malformed
    /// bucket never degrades into a neighboring one.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "1" => Some(Self::One),
            "2-3" => Some(Self::TwoToThree),
            "4-10" => Some(Self::FourToTen),
            "11+" => Some(Self::ElevenPlus),
            _ => None,
        }
    }

    /// The wire label used by the upstream aggregation job.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::TwoToThree => "2-3",
            Self::FourToTen => "4-10",
            Self::ElevenPlus => "11+",
        }
    }
}

impl fmt::Display for PartsBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
