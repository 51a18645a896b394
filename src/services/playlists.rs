//! Playlist store: validated add, ordered listing, lookup by name.

use chrono::Utc;
use rusqlite::Connection;

use crate::db;
use crate::domain::playlist::has_youtube_host;
use crate::domain::Playlist;
use crate::error::{Result, StudyError};

pub struct PlaylistStore<'a> {
  conn: &'a Connection,
}

impl<'a> PlaylistStore<'a> {
  pub fn new(conn: &'a Connection) -> Self {
    Self { conn }
  }

  /// Validate and persist a new playlist.
  ///
  /// The URL check is syntactic: it only looks for a YouTube host marker.
  pub fn add(&self, name: &str, url: &str) -> Result<Playlist> {
    let name = name.trim();
    let url = url.trim();

    if name.is_empty() || url.is_empty() {
      return Err(StudyError::validation("Please enter both name and URL"));
    }
    if !has_youtube_host(url) {
      return Err(StudyError::validation("Please enter a valid YouTube URL"));
    }
    if db::playlist_name_exists(self.conn, name)? {
      return Err(StudyError::validation(format!(
        "A playlist named '{}' already exists",
        name
      )));
    }

    let created_at = Utc::now();
    let id = db::insert_playlist(self.conn, name, url, created_at)?;
    tracing::info!("Added playlist '{}' ({})", name, url);

    Ok(Playlist {
      id,
      name: name.to_string(),
      url: url.to_string(),
      transcript: None,
      created_at,
    })
  }

  pub fn list(&self) -> Result<Vec<Playlist>> {
    Ok(db::get_playlists(self.conn)?)
  }

  pub fn find_by_name(&self, name: &str) -> Result<Playlist> {
    db::get_playlist_by_name(self.conn, name)?.ok_or_else(|| StudyError::playlist_not_found(name))
  }
}
