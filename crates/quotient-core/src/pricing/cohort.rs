use std::fmt;

use serde::{Deserialize, Serialize};

use super::bucket::PartsBucket;

/// Wire literal the upstream aggregation job uses for the dimension-free
/// top-level cohort. Confined to the parse/storage boundary; everything
/// downstream works with the tagged [`Technology`] enum.
pub(crate) const GLOBAL_WIRE: &str = "__global__";

/// A manufacturing technology dimension, with the top-level cohort as an
/// explicit variant rather than a reserved string. A real technology named
/// like the wire literal can never collide with the global cohort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name")]
#[serde(rename_all = "snake_case")]
pub enum Technology {
    /// The dimension-free, all-technologies cohort.
    Global,
    /// A concrete technology label, e.g. `"CNC"` or `"SLS"`.
    Named(String),
}

impl Technology {
    /// Map a raw technology string to the tagged form. The reserved wire
    /// literal becomes `Global`; anything else is a named technology.
    pub fn from_raw(raw: &str) -> Self {
        if raw == GLOBAL_WIRE {
            Self::Global
        } else {
            Self::Named(raw.to_string())
        }
    }

    /// The string stored in the `technology` column / sent on the wire.
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Global => GLOBAL_WIRE,
            Self::Named(name) => name,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Identifies one aggregation cohort: the `(technology, material,
/// parts-bucket)` triple a prior summarizes. `None` dimensions are part of
/// the identity — a `(tech, None, None)` key is a different cohort from
/// `(tech, Some(mat), None)`, never a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CohortKey {
    pub technology: Technology,
    pub material: Option<String>,
    pub parts_bucket: Option<PartsBucket>,
}

impl CohortKey {
    pub fn new(
        technology: Technology,
        material: Option<String>,
        parts_bucket: Option<PartsBucket>,
    ) -> Self {
        Self {
            technology,
            material,
            parts_bucket,
        }
    }

    /// The dimension-free top-level key.
    pub fn global() -> Self {
        Self {
            technology: Technology::Global,
            material: None,
            parts_bucket: None,
        }
    }
}

impl fmt::Display for CohortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.technology,
            self.material.as_deref().unwrap_or("-"),
            self.parts_bucket.map(|b| b.as_str()).unwrap_or("-"),
        )
    }
}
