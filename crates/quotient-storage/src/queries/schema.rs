//! Schema introspection: the priors capability check.

use rusqlite::Connection;

use quotient_core::errors::QuotientResult;

use crate::{to_storage_err, PRIORS_TABLE};

/// Whether the priors feature exists in this database at all. Engines
/// call this once per estimate, before any per-key fetch.
pub fn priors_table_exists(conn: &Connection) -> QuotientResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [PRIORS_TABLE],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count > 0)
}
