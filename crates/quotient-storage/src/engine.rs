//! StorageEngine — owns the SQLite connection, runs migrations on open,
//! implements IPriorStore.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use quotient_core::errors::QuotientResult;
use quotient_core::pricing::{CohortKey, PriorRecord};
use quotient_core::traits::IPriorStore;

use crate::migrations;
use crate::to_storage_err;

/// SQLite-backed prior store.
///
/// Point lookups only; an estimate issues at most nine of them, strictly
/// sequentially, so a single connection behind a mutex serves the load.
pub struct StorageEngine {
    conn: Mutex<Connection>,
}

impl StorageEngine {
    /// Open a file-backed store, creating the priors schema if absent.
    pub fn open(path: &Path) -> QuotientResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory store (for testing), migrated.
    pub fn open_in_memory() -> QuotientResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Attach to a database owned by the upstream aggregation pipeline,
    /// WITHOUT migrating. The priors table may legitimately not exist yet;
    /// `priors_supported` is how engines find out.
    pub fn attach(path: &Path) -> QuotientResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Attach to an empty in-memory database without migrating
    /// (for testing the capability check).
    pub fn attach_in_memory() -> QuotientResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the connection.
    fn with_conn<F, T>(&self, f: F) -> QuotientResult<T>
    where
        F: FnOnce(&Connection) -> QuotientResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned".to_string()))?;
        f(&conn)
    }

    /// Insert or replace the prior for a cohort. Writer surface for the
    /// upstream sync job and tests.
    pub fn upsert_prior(&self, record: &PriorRecord) -> QuotientResult<()> {
        self.with_conn(|conn| crate::queries::prior_ops::upsert_prior(conn, record))
    }

    /// Replace the whole priors table with a fresh export, atomically.
    pub fn replace_all_priors(&self, records: &[PriorRecord]) -> QuotientResult<usize> {
        self.with_conn(|conn| crate::queries::prior_ops::replace_all(conn, records))
    }

    pub fn prior_count(&self) -> QuotientResult<usize> {
        self.with_conn(crate::queries::prior_ops::count)
    }
}

impl IPriorStore for StorageEngine {
    fn priors_supported(&self) -> QuotientResult<bool> {
        self.with_conn(crate::queries::schema::priors_table_exists)
    }

    fn fetch_prior(&self, key: &CohortKey) -> QuotientResult<Option<PriorRecord>> {
        self.with_conn(|conn| crate::queries::prior_ops::get_prior(conn, key))
    }
}
