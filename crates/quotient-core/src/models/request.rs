use serde::{Deserialize, Serialize};

/// What the caller knows about the prospective job. Every field is
/// optional; the estimation engine degrades to coarser cohorts as
/// dimensions are missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub technology: Option<String>,
    pub material: Option<String>,
    /// Raw part quantity from the quote form. Kept as f64 so malformed
    /// client input (fractions, NaN) reaches the bucket classifier and is
    /// excluded there instead of panicking at the boundary.
    pub parts_count: Option<f64>,
}

impl EstimateRequest {
    pub fn new(
        technology: Option<impl Into<String>>,
        material: Option<impl Into<String>>,
        parts_count: Option<f64>,
    ) -> Self {
        Self {
            technology: technology.map(Into::into),
            material: material.map(Into::into),
            parts_count,
        }
    }
}
