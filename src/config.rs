//! Application configuration.
//!
//! Values come from `config.toml` first, then the environment (a `.env`
//! file is honoured), then the defaults in `paths.rs`. The completion API
//! key lives separately in `config.json` so the setup form can rewrite it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::dispatch::openai::DEFAULT_OPENAI_URL;
use crate::paths;

// ==================== Completion Configuration ====================

/// Model used for every dispatch
pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo";

/// Environment fallback for the API key when config.json has none
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "127.0.0.1";

/// Server port
pub const SERVER_PORT: u16 = 3000;

// ==================== Session Configuration ====================

/// Cookie carrying the study session id
pub const SESSION_COOKIE_NAME: &str = "study_session";

/// Session expiration time in hours
pub const SESSION_EXPIRY_HOURS: i64 = 12;

/// Probability threshold for session cleanup (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;

// ==================== config.toml ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
    notes: Option<NotesConfig>,
    completion: Option<CompletionConfig>,
    server: Option<ServerConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NotesConfig {
    dir: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionConfig {
    base_url: Option<String>,
    credentials_file: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServerConfig {
    addr: Option<String>,
    port: Option<u16>,
}

/// Resolved settings used to build the application state.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub notes_dir: PathBuf,
    pub credentials_path: PathBuf,
    pub api_base_url: String,
    pub bind_addr: String,
}

impl Settings {
    /// Load settings with priority: config.toml > .env / environment > default
    pub fn load() -> Self {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config_path = paths::config_path();
        let config = match fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                Ok(config) => {
                    tracing::info!("Using configuration from {}", config_path);
                    config
                }
                Err(e) => {
                    tracing::warn!("Ignoring invalid {}: {}", config_path, e);
                    AppConfig::default()
                }
            },
            Err(_) => AppConfig::default(),
        };

        Self::resolve(config, |key| std::env::var(key).ok())
    }

    /// Parse a config.toml body, falling back to defaults for anything missing.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let config = toml::from_str::<AppConfig>(contents)?;
        Ok(Self::resolve(config, |_| None))
    }

    fn resolve(config: AppConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = config
            .database
            .and_then(|db| db.path)
            .or_else(|| env("DATABASE_PATH"))
            .unwrap_or_else(paths::db_path);

        let notes_dir = config
            .notes
            .and_then(|notes| notes.dir)
            .or_else(|| env("NOTES_DIR"))
            .unwrap_or_else(paths::notes_dir);

        let (base_url, credentials_file) = match config.completion {
            Some(c) => (c.base_url, c.credentials_file),
            None => (None, None),
        };
        let api_base_url = base_url
            .or_else(|| env("OPENAI_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string());
        let credentials_path = credentials_file.unwrap_or_else(paths::credentials_path);

        let (addr, port) = match config.server {
            Some(s) => (s.addr, s.port),
            None => (None, None),
        };
        let port = port
            .or_else(|| env("PORT").and_then(|p| p.parse().ok()))
            .unwrap_or(SERVER_PORT);
        let bind_addr = format!("{}:{}", addr.as_deref().unwrap_or(SERVER_ADDR), port);

        Self {
            db_path: PathBuf::from(db_path),
            notes_dir: PathBuf::from(notes_dir),
            credentials_path: PathBuf::from(credentials_path),
            api_base_url,
            bind_addr,
        }
    }
}

// ==================== Credentials (config.json) ====================

#[derive(Debug, Default, Serialize, Deserialize)]
struct Credentials {
    #[serde(default)]
    openai_api_key: Option<String>,
}

/// Read the API key from the credentials file, falling back to `OPENAI_API_KEY`.
///
/// Returns `None` when neither source has a non-empty key; the UI then asks
/// the user for one.
pub fn load_api_key(path: &Path) -> Option<String> {
    read_api_key_file(path).or_else(|| {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
    })
}

fn read_api_key_file(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Credentials>(&contents) {
        Ok(credentials) => credentials
            .openai_api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty()),
        Err(e) => {
            tracing::warn!("Ignoring unreadable {}: {}", path.display(), e);
            None
        }
    }
}

/// Persist the API key as `{"openai_api_key": "..."}`.
pub fn save_api_key(path: &Path, api_key: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let credentials = Credentials {
        openai_api_key: Some(api_key.trim().to_string()),
    };
    let json = serde_json::to_string_pretty(&credentials).map_err(io::Error::other)?;
    fs::write(path, json)
}
