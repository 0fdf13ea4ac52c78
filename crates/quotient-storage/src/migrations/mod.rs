//! Schema migrations, tracked through `PRAGMA user_version`.

mod v001_priors_table;

use rusqlite::Connection;
use tracing::debug;

use quotient_core::errors::{QuotientResult, StorageError};

use crate::to_storage_err;

/// Bring the schema up to the current version. Idempotent.
pub fn run_migrations(conn: &Connection) -> QuotientResult<()> {
    let version: u32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    if version < 1 {
        debug!(from = version, "migrating priors schema to v1");
        v001_priors_table::migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version: 1,
            reason: e.to_string(),
        })?;
        conn.pragma_update(None, "user_version", 1)
            .map_err(|e| to_storage_err(e.to_string()))?;
    }

    Ok(())
}
