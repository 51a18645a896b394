use chrono::{DateTime, Local};

/// A note as saved from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
  pub title: String,
  pub body: String,
}

impl Note {
  /// Build a note, naming it after `now` when the title is blank.
  pub fn new(title: &str, body: &str, now: DateTime<Local>) -> Self {
    let title = title.trim();
    let title = if title.is_empty() {
      default_title(now)
    } else {
      title.to_string()
    };
    Self {
      title,
      body: body.to_string(),
    }
  }

  /// File name the note is written to.
  pub fn file_name(&self) -> String {
    format!("{}.txt", self.title)
  }
}

/// `Note_YYYYMMDD_HHMMSS`
pub fn default_title(now: DateTime<Local>) -> String {
  format!("Note_{}", now.format("%Y%m%d_%H%M%S"))
}

/// A title is usable as a file name if it cannot escape the notes directory.
pub fn is_safe_title(title: &str) -> bool {
  !title.is_empty()
    && !title.contains(['/', '\\', '\0'])
    && !title.contains("..")
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
  }

  #[test]
  fn test_blank_title_uses_timestamp() {
    let note = Note::new("   ", "body", fixed_now());
    assert_eq!(note.title, "Note_20240309_140507");
    assert_eq!(note.file_name(), "Note_20240309_140507.txt");
  }

  #[test]
  fn test_title_is_trimmed() {
    let note = Note::new("  Lecture 3 ", "x", fixed_now());
    assert_eq!(note.title, "Lecture 3");
  }

  #[test]
  fn test_safe_titles() {
    assert!(is_safe_title("Lecture 3"));
    assert!(is_safe_title("Note_20240309_140507"));
    assert!(!is_safe_title("../secrets"));
    assert!(!is_safe_title("a/b"));
    assert!(!is_safe_title("a\\b"));
    assert!(!is_safe_title(""));
  }
}
