//! Application state passed to all handlers.

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use crate::db::DbPool;
use crate::dispatch::Dispatcher;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
  /// Shared study database (playlists, generated tests)
  pub db: DbPool,

  pub dispatcher: Dispatcher,

  /// Completion API key, if one has been configured
  api_key: Arc<RwLock<Option<String>>>,

  pub sessions: SessionStore,

  /// Directory saved notes are written to
  pub notes_dir: PathBuf,

  /// JSON file the API key is persisted to
  pub credentials_path: PathBuf,
}

impl AppState {
  pub fn new(
    db: DbPool,
    dispatcher: Dispatcher,
    api_key: Option<String>,
    notes_dir: PathBuf,
    credentials_path: PathBuf,
  ) -> Self {
    Self {
      db,
      dispatcher,
      api_key: Arc::new(RwLock::new(api_key)),
      sessions: SessionStore::new(),
      notes_dir,
      credentials_path,
    }
  }

  pub fn api_key(&self) -> Option<String> {
    self
      .api_key
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .clone()
  }

  pub fn has_api_key(&self) -> bool {
    self.api_key().is_some()
  }

  /// Activate a key for subsequent dispatches.
  pub fn set_api_key(&self, api_key: String) {
    *self.api_key.write().unwrap_or_else(PoisonError::into_inner) = Some(api_key);
  }
}
