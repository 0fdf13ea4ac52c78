//! v001: pricing_priors.

use rusqlite::Connection;

use quotient_core::errors::QuotientResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> QuotientResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS pricing_priors (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            technology   TEXT NOT NULL,
            material     TEXT,
            parts_bucket TEXT,
            sample_size  INTEGER NOT NULL,
            p10          REAL NOT NULL,
            p50          REAL NOT NULL,
            p90          REAL NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_priors_cohort
            ON pricing_priors(technology, ifnull(material, ''), ifnull(parts_bucket, ''));
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
