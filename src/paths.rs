//! Project path functions - single source of truth for default file paths.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: ".")
//!
//! Every path can also be overridden in `config.toml` (see config.rs).

use std::env;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default ".")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string()))
}

/// SQLite database with playlists and generated tests
pub fn db_path() -> String {
    format!("{}/study_app.db", data_dir())
}

/// Directory saved notes are written to
pub fn notes_dir() -> String {
    format!("{}/notes", data_dir())
}

/// JSON file holding the completion API key
pub fn credentials_path() -> String {
    format!("{}/config.json", data_dir())
}

/// Application config file (database path, notes dir, API endpoint, server)
pub fn config_path() -> String {
    format!("{}/config.toml", data_dir())
}

/// Static assets (stylesheet) - not under DATA_DIR
pub const STATIC_DIR: &str = "static";

#[cfg(test)]
mod tests {
    use super::*;

    // Note: We can't easily test env var override because OnceLock
    // initializes once. These tests verify the default behavior.

    #[test]
    fn test_data_dir_default() {
        let dir = data_dir();
        assert!(!dir.is_empty());
    }

    #[test]
    fn test_db_path_format() {
        assert!(db_path().ends_with("/study_app.db"));
    }

    #[test]
    fn test_notes_dir_format() {
        assert!(notes_dir().ends_with("/notes"));
    }

    #[test]
    fn test_credentials_path_format() {
        assert!(credentials_path().ends_with("/config.json"));
        assert!(config_path().ends_with("/config.toml"));
    }
}
