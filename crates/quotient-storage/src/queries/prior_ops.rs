//! Raw SQL operations for the pricing_priors table.

use rusqlite::{params, Connection, Row};

use quotient_core::errors::{QuotientError, QuotientResult, StorageError};
use quotient_core::pricing::{CohortKey, PartsBucket, PriorRecord, Technology};

use crate::{to_storage_err, PRIORS_TABLE};

const PRIOR_COLUMNS: &str = "technology, material, parts_bucket, sample_size, p10, p50, p90";

/// Surface a missing priors table as its own error variant so observers
/// can tell an unprovisioned schema from a transient query failure.
fn map_prepare_err(e: rusqlite::Error) -> QuotientError {
    let message = e.to_string();
    if message.contains("no such table") {
        QuotientError::Storage(StorageError::SchemaMissing {
            object: PRIORS_TABLE.to_string(),
        })
    } else {
        to_storage_err(message)
    }
}

fn parse_prior_row(row: &Row<'_>) -> rusqlite::Result<PriorRecord> {
    let technology: String = row.get(0)?;
    let material: Option<String> = row.get(1)?;
    let parts_bucket: Option<String> = row.get(2)?;
    let sample_size: i64 = row.get(3)?;
    Ok(PriorRecord {
        technology: Technology::from_raw(&technology),
        material,
        // A label the current code doesn't know is treated as unbucketed
        // rather than failing the whole lookup.
        parts_bucket: parts_bucket.as_deref().and_then(PartsBucket::parse),
        sample_size: sample_size.max(0) as u64,
        p10: row.get(4)?,
        p50: row.get(5)?,
        p90: row.get(6)?,
    })
}

/// Equality point lookup. `IS` makes `NULL` dimensions match only rows
/// explicitly stored as `NULL`, never act as wildcards.
pub fn get_prior(conn: &Connection, key: &CohortKey) -> QuotientResult<Option<PriorRecord>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {PRIOR_COLUMNS} FROM pricing_priors
             WHERE technology = ?1 AND material IS ?2 AND parts_bucket IS ?3
             LIMIT 1"
        ))
        .map_err(map_prepare_err)?;

    let mut rows = stmt
        .query_map(
            params![
                key.technology.as_wire(),
                key.material,
                key.parts_bucket.map(PartsBucket::as_str),
            ],
            parse_prior_row,
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    match rows.next() {
        Some(row) => Ok(Some(row.map_err(|e| to_storage_err(e.to_string()))?)),
        None => Ok(None),
    }
}

/// Insert or replace the prior for a cohort.
pub fn upsert_prior(conn: &Connection, record: &PriorRecord) -> QuotientResult<()> {
    conn.execute(
        "DELETE FROM pricing_priors
         WHERE technology = ?1 AND material IS ?2 AND parts_bucket IS ?3",
        params![
            record.technology.as_wire(),
            record.material,
            record.parts_bucket.map(PartsBucket::as_str),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    conn.execute(
        &format!(
            "INSERT INTO pricing_priors ({PRIOR_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
        ),
        params![
            record.technology.as_wire(),
            record.material,
            record.parts_bucket.map(PartsBucket::as_str),
            record.sample_size as i64,
            record.p10,
            record.p50,
            record.p90,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Swap the whole table for a fresh export in one transaction.
pub fn replace_all(conn: &Connection, records: &[PriorRecord]) -> QuotientResult<usize> {
    conn.execute_batch("BEGIN")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = (|| -> QuotientResult<usize> {
        conn.execute("DELETE FROM pricing_priors", [])
            .map_err(|e| to_storage_err(e.to_string()))?;
        for record in records {
            upsert_prior(conn, record)?;
        }
        Ok(records.len())
    })();

    match result {
        Ok(count) => {
            conn.execute_batch("COMMIT")
                .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(count)
        }
        Err(err) => {
            let _ = conn.execute_batch("ROLLBACK");
            Err(err)
        }
    }
}

pub fn count(conn: &Connection) -> QuotientResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM pricing_priors", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}
