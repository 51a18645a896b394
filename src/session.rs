//! In-memory workspace state per browser session.
//!
//! Each browser gets a session id cookie. The store keeps the selected
//! playlist, the editor buffer, the latest AI outputs, the open flashcard
//! deck and a one-shot notice. Sessions expire after a period of inactivity.

use crate::config;
use crate::domain::FlashcardDeck;
use crate::error::StudyError;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
  Info,
  Warning,
  Error,
}

impl NoticeLevel {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Info => "info",
      Self::Warning => "warning",
      Self::Error => "error",
    }
  }
}

/// Message shown once at the top of the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub level: NoticeLevel,
  pub message: String,
}

impl Notice {
  pub fn info(message: impl Into<String>) -> Self {
    Self {
      level: NoticeLevel::Info,
      message: message.into(),
    }
  }

  pub fn warning(message: impl Into<String>) -> Self {
    Self {
      level: NoticeLevel::Warning,
      message: message.into(),
    }
  }

  /// Warning for input problems; error with `failure` as prefix otherwise.
  pub fn from_error(failure: &str, err: &StudyError) -> Self {
    if err.is_warning() {
      Self::warning(err.user_message())
    } else {
      Self {
        level: NoticeLevel::Error,
        message: format!("{}: {}", failure, err.user_message()),
      }
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct StudySession {
  pub selected_playlist: Option<String>,
  pub note_title: String,
  pub notes: String,
  /// AI Analysis tab (note analysis or summary)
  pub analysis: Option<String>,
  /// Q&A tab
  pub qa_output: Option<String>,
  /// Practice Tests tab
  pub test_output: Option<String>,
  pub deck: Option<FlashcardDeck>,
  pub notice: Option<Notice>,
}

impl StudySession {
  pub fn new() -> Self {
    Self::default()
  }

  /// Remove and return the pending notice.
  pub fn take_notice(&mut self) -> Option<Notice> {
    self.notice.take()
  }
}

/// Session entry with last access time for expiration
struct SessionEntry {
  session: StudySession,
  last_access: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
  sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
}

impl SessionStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
    self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Get (creating if needed) a snapshot of the session for the given ID
  pub fn get(&self, session_id: &str) -> StudySession {
    self.modify(session_id, |session| session.clone())
  }

  /// Apply `f` to the session in place and return its result.
  ///
  /// The store lock is held for the whole call, so concurrent requests for
  /// the same session are applied one after the other.
  pub fn modify<R>(&self, session_id: &str, f: impl FnOnce(&mut StudySession) -> R) -> R {
    let mut sessions = self.lock();

    // Clean up expired sessions occasionally (~10% chance)
    if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
      cleanup_expired(&mut sessions);
    }

    let entry = sessions
      .entry(session_id.to_string())
      .or_insert_with(|| SessionEntry {
        session: StudySession::new(),
        last_access: Utc::now(),
      });
    entry.last_access = Utc::now();
    f(&mut entry.session)
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Clean up expired sessions
fn cleanup_expired(sessions: &mut HashMap<String, SessionEntry>) {
  let expiry = Utc::now() - Duration::hours(config::SESSION_EXPIRY_HOURS);
  sessions.retain(|_, entry| entry.last_access > expiry);
}

/// Generate a new session ID
pub fn generate_session_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..32)
    .map(|_| {
      let idx = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}
