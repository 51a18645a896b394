use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::domain::Playlist;

pub fn insert_playlist(conn: &Connection, name: &str, url: &str, created_at: DateTime<Utc>) -> Result<i64> {
  conn.execute(
    "INSERT INTO playlists (name, url, created_at) VALUES (?1, ?2, ?3)",
    params![name, url, created_at.to_rfc3339()],
  )?;
  Ok(conn.last_insert_rowid())
}

/// All playlists in the order they were added.
pub fn get_playlists(conn: &Connection) -> Result<Vec<Playlist>> {
  let mut stmt = conn.prepare(
    "SELECT id, name, url, transcript, created_at FROM playlists ORDER BY id ASC",
  )?;
  let playlists = stmt
    .query_map([], |row| row_to_playlist(row))?
    .collect::<Result<Vec<_>>>()?;
  Ok(playlists)
}

pub fn get_playlist_by_name(conn: &Connection, name: &str) -> Result<Option<Playlist>> {
  conn
    .query_row(
      "SELECT id, name, url, transcript, created_at FROM playlists WHERE name = ?1",
      params![name],
      |row| row_to_playlist(row),
    )
    .optional()
}

pub fn playlist_name_exists(conn: &Connection, name: &str) -> Result<bool> {
  conn.query_row(
    "SELECT COUNT(*) > 0 FROM playlists WHERE name = ?1",
    params![name],
    |row| row.get(0),
  )
}

fn row_to_playlist(row: &rusqlite::Row) -> Result<Playlist> {
  let created_at_str: String = row.get(4)?;

  Ok(Playlist {
    id: row.get(0)?,
    name: row.get(1)?,
    url: row.get(2)?,
    transcript: row.get(3)?,
    created_at: DateTime::parse_from_rfc3339(&created_at_str)
      .map(|dt| dt.with_timezone(&Utc))
      .unwrap_or_else(|_| Utc::now()),
  })
}
