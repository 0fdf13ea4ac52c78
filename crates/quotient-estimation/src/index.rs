//! In-memory cohort index for the pure estimation variant.

use std::collections::HashMap;

use quotient_core::pricing::{CohortKey, PriorRecord, RawPriorRow};

/// Map from cohort key to its normalized prior, built from a snapshot of
/// raw rows. Rows failing normalization are dropped. When two rows
/// normalize to the same key, the later one wins — upstream exports are
/// expected to be key-unique, so this only matters for malformed feeds.
#[derive(Debug, Clone, Default)]
pub struct PriorIndex {
    map: HashMap<CohortKey, PriorRecord>,
}

impl PriorIndex {
    pub fn from_rows(rows: &[RawPriorRow]) -> Self {
        let mut map = HashMap::with_capacity(rows.len());
        for record in rows.iter().filter_map(RawPriorRow::normalize) {
            map.insert(record.cohort_key(), record);
        }
        Self { map }
    }

    pub fn get(&self, key: &CohortKey) -> Option<&PriorRecord> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
