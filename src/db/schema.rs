use rusqlite::{Connection, Result};

/// Create the playlist and generated-test tables if they are missing.
///
/// There are no migrations: the schema is only ever created.
pub fn create_schema(conn: &Connection) -> Result<()> {
  conn.execute_batch(
    r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS playlists (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      name TEXT NOT NULL UNIQUE,
      url TEXT NOT NULL,
      transcript TEXT,
      created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS generated_tests (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      playlist_id INTEGER NOT NULL,
      questions TEXT NOT NULL,
      answers TEXT NOT NULL,
      created_at TEXT NOT NULL,
      FOREIGN KEY (playlist_id) REFERENCES playlists(id)
    );

    CREATE INDEX IF NOT EXISTS idx_generated_tests_playlist_id ON generated_tests(playlist_id);
    "#,
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_create_schema_is_idempotent() {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn).unwrap();
    create_schema(&conn).unwrap();
  }

  #[test]
  fn test_generated_tests_require_existing_playlist() {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn).unwrap();

    let result = conn.execute(
      "INSERT INTO generated_tests (playlist_id, questions, answers, created_at) VALUES (42, 'q', 'a', 'now')",
      [],
    );
    assert!(result.is_err());
  }
}
