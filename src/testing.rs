//! Test utilities for database setup.
//!
//! Provides helpers that reuse the authoritative schema creation,
//! eliminating schema duplication in test code.

use rusqlite::Connection;
use tempfile::TempDir;

/// Test environment with a study database in a temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// study_app.db connection with the full schema
    pub conn: Connection,
}

impl TestEnv {
    /// Create a test environment using `crate::db::schema::create_schema()`.
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let db_path = temp.path().join("study_app.db");
        let conn = Connection::open(&db_path)?;
        crate::db::schema::create_schema(&conn)?;

        Ok(Self { temp, conn })
    }
}
