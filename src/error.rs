//! Errors surfaced to the user at the boundary of an action.

use crate::db::DbLockError;
use crate::dispatch::DispatchError;

#[derive(Debug)]
pub enum StudyError {
  /// Empty or malformed user input.
  Validation(String),
  /// A referenced playlist does not exist.
  NotFound(String),
  Dispatch(DispatchError),
  Database(rusqlite::Error),
  /// The shared connection lock is poisoned.
  DatabaseUnavailable,
  Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, StudyError>;

impl StudyError {
  pub fn validation(message: impl Into<String>) -> Self {
    StudyError::Validation(message.into())
  }

  pub fn playlist_not_found(name: &str) -> Self {
    StudyError::NotFound(format!("Playlist '{}' not found", name))
  }

  /// Warnings are input problems the user can fix; everything else is an error.
  pub fn is_warning(&self) -> bool {
    matches!(self, StudyError::Validation(_) | StudyError::NotFound(_))
  }

  /// Message suitable for display, without storage internals.
  pub fn user_message(&self) -> String {
    match self {
      StudyError::Validation(msg) | StudyError::NotFound(msg) => msg.clone(),
      StudyError::Dispatch(e) => e.reason(),
      StudyError::Database(_) => "Database error".to_string(),
      StudyError::DatabaseUnavailable => "Database unavailable".to_string(),
      StudyError::Io(e) => format!("File error: {}", e),
    }
  }
}

impl std::fmt::Display for StudyError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      StudyError::Validation(msg) => write!(f, "Validation error: {}", msg),
      StudyError::NotFound(msg) => write!(f, "Not found: {}", msg),
      StudyError::Dispatch(e) => write!(f, "Dispatch error: {}", e),
      StudyError::Database(e) => write!(f, "Database error: {}", e),
      StudyError::DatabaseUnavailable => write!(f, "Database unavailable"),
      StudyError::Io(e) => write!(f, "IO error: {}", e),
    }
  }
}

impl std::error::Error for StudyError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      StudyError::Dispatch(e) => Some(e),
      StudyError::Database(e) => Some(e),
      StudyError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<DispatchError> for StudyError {
  fn from(e: DispatchError) -> Self {
    StudyError::Dispatch(e)
  }
}

impl From<rusqlite::Error> for StudyError {
  fn from(e: rusqlite::Error) -> Self {
    StudyError::Database(e)
  }
}

impl From<std::io::Error> for StudyError {
  fn from(e: std::io::Error) -> Self {
    StudyError::Io(e)
  }
}

impl From<DbLockError> for StudyError {
  fn from(_: DbLockError) -> Self {
    StudyError::DatabaseUnavailable
  }
}
