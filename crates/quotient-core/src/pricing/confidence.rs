use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse reliability label derived from a cohort's sample size.
/// Shown to callers instead of raw deal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    Strong,
    Moderate,
    Limited,
    Unknown,
}

impl ConfidenceBand {
    /// Minimum sample size for a strong band.
    pub const STRONG_MIN: u64 = 200;
    /// Minimum sample size for a moderate band.
    pub const MODERATE_MIN: u64 = 50;
    /// Minimum sample size for a limited band.
    pub const LIMITED_MIN: u64 = 10;

    /// Classify a cohort's sample size. The caller passes the **chosen**
    /// (pre-blend) cohort's count; shrinkage never changes the band.
    pub fn from_sample_size(n: u64) -> Self {
        if n >= Self::STRONG_MIN {
            Self::Strong
        } else if n >= Self::MODERATE_MIN {
            Self::Moderate
        } else if n >= Self::LIMITED_MIN {
            Self::Limited
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Limited => "limited",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
