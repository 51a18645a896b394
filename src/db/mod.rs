pub mod playlists;
pub mod schema;

use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Re-export all public items from submodules
pub use generated_tests::*;
pub use playlists::*;
pub use schema::create_schema;

pub type DbPool = Arc<Mutex<Connection>>;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
    /// Log the error at warn level and return None
    fn log_warn(self, context: &str) -> Option<T>;
    /// Log the error at warn level and return the default
    fn log_warn_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                None
            }
        }
    }

    fn log_warn_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                T::default()
            }
        }
    }
}

/// Error returned when database lock cannot be acquired
#[derive(Debug)]
pub struct DbLockError;

impl std::fmt::Display for DbLockError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Database unavailable")
  }
}

impl std::error::Error for DbLockError {}

/// Try to acquire the database lock, returning an error if poisoned
pub fn try_lock(pool: &DbPool) -> std::result::Result<MutexGuard<'_, Connection>, DbLockError> {
  pool.lock().map_err(|_: PoisonError<_>| {
    tracing::error!("Database mutex poisoned - a thread panicked while holding the lock");
    DbLockError
  })
}

/// Open (creating if needed) the study database and make sure the schema exists.
pub fn init_db(path: &Path) -> Result<DbPool> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).ok();
  }

  let conn = Connection::open(path)?;
  create_schema(&conn)?;
  Ok(Arc::new(Mutex::new(conn)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn test_init_db_creates_parent_and_tables() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/study_app.db");

    let pool = init_db(&path).unwrap();
    assert!(path.exists());

    let conn = try_lock(&pool).unwrap();
    let count: i64 = conn
      .query_row("SELECT COUNT(*) FROM playlists", [], |row| row.get(0))
      .unwrap();
    assert_eq!(count, 0);
  }

  #[test]
  fn test_log_warn_default_swallows_error() {
    let failed: std::result::Result<Vec<i64>, String> = Err("boom".to_string());
    assert!(failed.log_warn_default("listing").is_empty());

    let ok: std::result::Result<i64, String> = Ok(3);
    assert_eq!(ok.log_warn("value"), Some(3));
  }
}
