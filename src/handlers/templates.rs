//! Template and form structs for the workspace handlers.

use askama::Template;
use serde::Deserialize;

use crate::domain::GeneratedTest;
use crate::filters;
use crate::session::Notice;

/// One entry in the playlist sidebar.
pub struct PlaylistRow {
  pub name: String,
  pub url: String,
  pub selected: bool,
  pub playable: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
  pub notice: Option<Notice>,
  pub has_api_key: bool,
  pub playlists: Vec<PlaylistRow>,
  pub selected_playlist: Option<String>,
  pub embed_url: Option<String>,
  pub note_title: String,
  pub notes: String,
  pub analysis: Option<String>,
  pub qa_output: Option<String>,
  pub test_output: Option<String>,
  pub previous_tests: Vec<GeneratedTest>,
}

#[derive(Template)]
#[template(path = "flashcards.html")]
pub struct FlashcardsTemplate {
  pub notice: Option<Notice>,
  pub has_deck: bool,
  pub text: Option<String>,
  pub position_label: Option<String>,
  pub showing_front: bool,
  pub is_first: bool,
  pub is_last: bool,
  pub playlist: Option<String>,
}

#[derive(Template)]
#[template(path = "api_key.html")]
pub struct ApiKeyTemplate {
  pub notice: Option<Notice>,
  pub configured: bool,
  pub error: Option<String>,
}

/// Everything the workspace form submits. Every action button posts the
/// whole form so the editor buffer survives the round trip.
#[derive(Debug, Default, Deserialize)]
pub struct WorkspaceForm {
  #[serde(default)]
  pub note_title: String,
  #[serde(default)]
  pub notes: String,
  #[serde(default)]
  pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct AddPlaylistForm {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectPlaylistForm {
  pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiKeyForm {
  #[serde(default)]
  pub api_key: String,
}
