use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregation level a prior was selected from, most specific first.
/// Doubles as the `source` label on returned estimates so presentation
/// code can tell how coarse the underlying cohort was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLevel {
    #[serde(rename = "tech+mat+parts")]
    TechMatParts,
    #[serde(rename = "tech+mat")]
    TechMat,
    #[serde(rename = "tech+parts")]
    TechParts,
    #[serde(rename = "tech")]
    Tech,
    #[serde(rename = "global")]
    Global,
}

impl SourceLevel {
    /// The next coarser level used for shrinkage blending. Note this is a
    /// single static chain, not the fallback order: `tech+parts` blends
    /// toward `tech`, never toward `tech+mat`.
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::TechMatParts => Some(Self::TechMat),
            Self::TechMat => Some(Self::Tech),
            Self::TechParts => Some(Self::Tech),
            Self::Tech => Some(Self::Global),
            Self::Global => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TechMatParts => "tech+mat+parts",
            Self::TechMat => "tech+mat",
            Self::TechParts => "tech+parts",
            Self::Tech => "tech",
            Self::Global => "global",
        }
    }
}

impl fmt::Display for SourceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
