use std::path::PathBuf;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_test::{TestResponse, TestServer};
use tempfile::TempDir;

use super::router;
use crate::config::SESSION_COOKIE_NAME;
use crate::db;
use crate::dispatch::mock::MockBackend;
use crate::dispatch::{DispatchError, Dispatcher};
use crate::state::AppState;

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

struct TestApp {
  server: TestServer,
  state: AppState,
  backend: MockBackend,
  cookie: Cookie<'static>,
  notes_dir: PathBuf,
  credentials_path: PathBuf,
  _temp: TempDir,
}

impl TestApp {
  async fn start(backend: MockBackend, api_key: Option<&str>) -> Self {
    let temp = TempDir::new().unwrap();
    let pool = db::init_db(&temp.path().join("study_app.db")).unwrap();
    let notes_dir = temp.path().join("notes");
    let credentials_path = temp.path().join("config.json");

    let state = AppState::new(
      pool,
      Dispatcher::new(Arc::new(backend.clone())),
      api_key.map(str::to_string),
      notes_dir.clone(),
      credentials_path.clone(),
    );
    let server = TestServer::new(router(state.clone())).unwrap();

    let response = server.get("/").await;
    response.assert_status_ok();
    let cookie = response.cookie(SESSION_COOKIE_NAME);

    Self {
      server,
      state,
      backend,
      cookie,
      notes_dir,
      credentials_path,
      _temp: temp,
    }
  }

  async fn page(&self, path: &str) -> String {
    let response = self.server.get(path).add_cookie(self.cookie.clone()).await;
    response.assert_status_ok();
    response.text()
  }

  async fn post(&self, path: &str, form: &[(&str, &str)]) -> TestResponse {
    let response = self
      .server
      .post(path)
      .add_cookie(self.cookie.clone())
      .form(&form)
      .await;
    response.assert_status(StatusCode::SEE_OTHER);
    response
  }

  async fn add_playlist(&self, name: &str, url: &str) {
    self.post("/playlists", &[("name", name), ("url", url)]).await;
  }
}

fn location(response: &TestResponse) -> String {
  response
    .header("location")
    .to_str()
    .unwrap()
    .to_string()
}

#[tokio::test]
async fn test_index_renders_empty_workspace() {
  let app = TestApp::start(MockBackend::replying("unused"), Some("sk-test")).await;
  let body = app.page("/").await;

  assert!(body.contains("Study Playlists"));
  assert!(body.contains("Select a playlist to start watching."));
  assert!(!body.contains("No OpenAI API key is configured"));
}

#[tokio::test]
async fn test_index_prompts_for_missing_key() {
  let app = TestApp::start(MockBackend::replying("unused"), None).await;
  let body = app.page("/").await;
  assert!(body.contains("No OpenAI API key is configured"));
}

#[tokio::test]
async fn test_add_playlist_rejects_non_youtube_url() {
  let app = TestApp::start(MockBackend::replying("unused"), Some("sk-test")).await;
  app.add_playlist("Biology", "https://example.com/watch?v=abc").await;

  let body = app.page("/").await;
  assert!(body.contains("Please enter a valid YouTube URL"));
  assert!(!body.contains("Biology"));

  // Notice is shown once
  let body = app.page("/").await;
  assert!(!body.contains("Please enter a valid YouTube URL"));
}

#[tokio::test]
async fn test_add_playlist_selects_and_embeds_video() {
  let app = TestApp::start(MockBackend::replying("unused"), Some("sk-test")).await;
  app.add_playlist("Biology", VIDEO_URL).await;

  let body = app.page("/").await;
  assert!(body.contains("Biology"));
  assert!(body.contains("dQw4w9WgXcQ?rel=0"));
  assert!(body.contains("<iframe"));
}

#[tokio::test]
async fn test_select_unknown_playlist_warns() {
  let app = TestApp::start(MockBackend::replying("unused"), Some("sk-test")).await;
  app.post("/playlists/select", &[("name", "Chemistry")]).await;

  let body = app.page("/").await;
  assert!(body.contains("not found"));
}

#[tokio::test]
async fn test_ai_action_requires_selected_playlist() {
  let app = TestApp::start(MockBackend::replying("A summary"), Some("sk-test")).await;
  app
    .post("/ai/summarize", &[("notes", "cells divide"), ("note_title", "")])
    .await;

  let body = app.page("/").await;
  assert!(body.contains("Please select a playlist first"));
  assert!(app.backend.calls().is_empty());
}

#[tokio::test]
async fn test_summarize_fills_analysis_tab() {
  let app = TestApp::start(MockBackend::replying("Cells divide by mitosis."), Some("sk-test")).await;
  app.add_playlist("Biology", VIDEO_URL).await;
  app.post("/ai/summarize", &[("notes", "cells divide")]).await;

  let body = app.page("/").await;
  assert!(body.contains("Summary of Biology"));
  assert!(body.contains("Cells divide by mitosis."));
  // The editor buffer survives the round trip
  assert!(body.contains("cells divide"));

  let calls = app.backend.calls();
  assert_eq!(calls.len(), 1);
  assert_eq!(calls[0].messages[1].content, "Content for Biology:\ncells divide");
}

#[tokio::test]
async fn test_dispatch_failure_is_reported() {
  let backend = MockBackend::failing(DispatchError::Request("timeout".to_string()));
  let app = TestApp::start(backend, Some("sk-test")).await;
  app.add_playlist("Biology", VIDEO_URL).await;
  app.post("/ai/summarize", &[("notes", "cells divide")]).await;

  let body = app.page("/").await;
  assert!(body.contains("Failed to summarize content: timeout"));
}

#[tokio::test]
async fn test_ask_question_formats_answer() {
  let app = TestApp::start(MockBackend::replying("Mitosis."), Some("sk-test")).await;
  app.add_playlist("Biology", VIDEO_URL).await;
  app
    .post(
      "/ai/ask",
      &[("notes", "cells divide"), ("question", "How do cells divide?")],
    )
    .await;

  let body = app.page("/").await;
  assert!(body.contains("Q: How do cells divide?"));
  assert!(body.contains("A: Mitosis."));
  assert_eq!(
    app.backend.calls()[0].messages[1].content,
    "Context:\ncells divide\n\nQuestion: How do cells divide?"
  );
}

#[tokio::test]
async fn test_generate_test_persists_record() {
  let app = TestApp::start(
    MockBackend::replying("1. What is mitosis?\nAnswers:\n1. Cell division"),
    Some("sk-test"),
  )
  .await;
  app.add_playlist("Biology", VIDEO_URL).await;
  app.post("/ai/test", &[("notes", "cells divide")]).await;

  let count: i64 = {
    let conn = db::try_lock(&app.state.db).unwrap();
    conn
      .query_row("SELECT COUNT(*) FROM generated_tests", [], |row| row.get(0))
      .unwrap()
  };
  assert_eq!(count, 1);

  let body = app.page("/").await;
  assert!(body.contains("Saved tests"));
  assert!(body.contains("1. Cell division"));
}

#[tokio::test]
async fn test_flashcard_flow() {
  let app = TestApp::start(
    MockBackend::replying(
      "Front: Mitochondria | Back: Powerhouse of the cell\nFront: Ribosome | Back: Builds proteins",
    ),
    Some("sk-test"),
  )
  .await;
  app.add_playlist("Biology", VIDEO_URL).await;

  let response = app.post("/ai/flashcards", &[("notes", "organelles")]).await;
  assert_eq!(location(&response), "/flashcards");

  let body = app.page("/flashcards").await;
  assert!(body.contains("Mitochondria"));
  assert!(body.contains("Card 1 of 2"));

  let response = app.post("/flashcards/flip", &[]).await;
  assert_eq!(location(&response), "/flashcards");
  let body = app.page("/flashcards").await;
  assert!(body.contains("Powerhouse of the cell"));
  assert!(!body.contains("Mitochondria"));

  app.post("/flashcards/next", &[]).await;
  let body = app.page("/flashcards").await;
  assert!(body.contains("Ribosome"));
  assert!(body.contains("Card 2 of 2"));

  // Already on the last card
  app.post("/flashcards/next", &[]).await;
  let body = app.page("/flashcards").await;
  assert!(body.contains("Card 2 of 2"));

  app.post("/flashcards/previous", &[]).await;
  let body = app.page("/flashcards").await;
  assert!(body.contains("Card 1 of 2"));
}

#[tokio::test]
async fn test_flashcards_page_without_deck() {
  let app = TestApp::start(MockBackend::replying("unused"), Some("sk-test")).await;
  let body = app.page("/flashcards").await;
  assert!(body.contains("No flashcards yet."));
}

#[tokio::test]
async fn test_analyze_without_key_redirects_to_setup() {
  let app = TestApp::start(MockBackend::replying("Looks thorough."), None).await;

  let response = app.post("/ai/analyze", &[("notes", "cells divide")]).await;
  assert_eq!(location(&response), "/settings/api-key");

  let body = app.page("/settings/api-key").await;
  assert!(body.contains("Please set up your OpenAI API key first"));
  assert!(app.backend.calls().is_empty());

  let response = app.post("/settings/api-key", &[("api_key", "sk-new")]).await;
  assert_eq!(location(&response), "/");
  assert!(app.credentials_path.exists());
  assert_eq!(app.state.api_key().as_deref(), Some("sk-new"));

  app.post("/ai/analyze", &[("notes", "cells divide")]).await;
  let body = app.page("/").await;
  assert!(body.contains("Looks thorough."));
}

#[tokio::test]
async fn test_blank_api_key_is_rejected() {
  let app = TestApp::start(MockBackend::replying("unused"), None).await;
  let response = app
    .server
    .post("/settings/api-key")
    .add_cookie(app.cookie.clone())
    .form(&[("api_key", "   ")])
    .await;

  response.assert_status_ok();
  assert!(response.text().contains("Please enter an API key"));
  assert!(!app.credentials_path.exists());
  assert!(!app.state.has_api_key());
}

#[tokio::test]
async fn test_analyze_requires_notes() {
  let app = TestApp::start(MockBackend::replying("unused"), Some("sk-test")).await;
  app.post("/ai/analyze", &[("notes", "  ")]).await;

  let body = app.page("/").await;
  assert!(body.contains("Please enter some notes first"));
  assert!(app.backend.calls().is_empty());
}

#[tokio::test]
async fn test_save_note_writes_file() {
  let app = TestApp::start(MockBackend::replying("unused"), Some("sk-test")).await;
  app
    .post(
      "/notes",
      &[("note_title", "Lecture 1"), ("notes", "Cells divide by mitosis.")],
    )
    .await;

  let saved = std::fs::read_to_string(app.notes_dir.join("Lecture 1.txt")).unwrap();
  assert_eq!(saved, "Cells divide by mitosis.");

  let body = app.page("/").await;
  assert!(body.contains("Note saved successfully!"));
}

#[tokio::test]
async fn test_save_note_rejects_path_in_title() {
  let app = TestApp::start(MockBackend::replying("unused"), Some("sk-test")).await;
  app
    .post("/notes", &[("note_title", "../escape"), ("notes", "body")])
    .await;

  assert!(!app.notes_dir.join("escape.txt").exists());
  let body = app.page("/").await;
  assert!(body.contains("path separators"));
}
