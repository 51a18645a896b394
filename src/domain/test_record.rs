use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Line separating the questions from the answers in a generated test.
///
/// Best effort: the model is asked for questions and answers but nothing
/// forces it to emit this exact marker.
pub const ANSWERS_DELIMITER: &str = "\nAnswers:\n";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTest {
  pub id: i64,
  pub playlist_id: i64,
  pub questions: String,
  pub answers: String,
  pub created_at: DateTime<Utc>,
}

/// Split generated test text on the first answers delimiter.
///
/// Returns `(questions, answers)`; answers is empty when the delimiter is
/// missing.
pub fn split_test_text(text: &str) -> (String, String) {
  match text.split_once(ANSWERS_DELIMITER) {
    Some((questions, answers)) => (questions.to_string(), answers.to_string()),
    None => (text.to_string(), String::new()),
  }
}
