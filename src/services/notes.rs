//! Note files: one plain-text file per save.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::note::is_safe_title;
use crate::domain::Note;
use crate::error::{Result, StudyError};

/// Write the note to `<notes_dir>/<title>.txt`, creating the directory first.
///
/// A blank title becomes `Note_YYYYMMDD_HHMMSS`. Saving twice under the same
/// title overwrites the earlier file.
pub fn save_note(notes_dir: &Path, title: &str, body: &str) -> Result<PathBuf> {
  let note = Note::new(title, body, Local::now());
  if !is_safe_title(&note.title) {
    return Err(StudyError::validation(
      "Note title cannot contain path separators or '..'",
    ));
  }

  fs::create_dir_all(notes_dir)?;
  let path = notes_dir.join(note.file_name());
  fs::write(&path, &note.body)?;
  tracing::info!("Saved note to {}", path.display());
  Ok(path)
}
