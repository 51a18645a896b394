//! AI tool buttons. Each one dispatches a single task and files the result
//! into the matching workspace tab.

use axum::{
  extract::State,
  response::{IntoResponse, Redirect},
  Form,
};
use axum_extra::extract::CookieJar;

use crate::db;
use crate::dispatch::TaskKind;
use crate::domain::FlashcardDeck;
use crate::error::{Result, StudyError};
use crate::services::{PlaylistStore, TestRecords};
use crate::session::Notice;
use crate::state::AppState;

use super::templates::WorkspaceForm;
use super::{record_outcome, session_id};

fn require_playlist(selected: Option<&str>) -> Result<&str> {
  selected.ok_or_else(|| StudyError::validation("Please select a playlist first"))
}

async fn dispatch(
  state: &AppState,
  task: TaskKind,
  content: &str,
  context: Option<&str>,
) -> Result<String> {
  let api_key = state.api_key();
  Ok(
    state
      .dispatcher
      .dispatch(api_key.as_deref(), task, content, context)
      .await?,
  )
}

/// Answer a question using the notes as context.
pub async fn answer_question(
  state: &AppState,
  selected: Option<&str>,
  notes: &str,
  question: &str,
) -> Result<String> {
  require_playlist(selected)?;
  let question = question.trim();
  if question.is_empty() {
    return Err(StudyError::validation("Please enter a question"));
  }

  let answer = dispatch(state, TaskKind::Qa, question, Some(notes)).await?;
  Ok(format!("Q: {}\n\nA: {}", question, answer))
}

/// Generate a practice test and store it under the selected playlist.
///
/// The playlist is resolved before the call so an unknown name never costs a
/// request, and the test is only saved once the dispatch has succeeded.
pub async fn generate_practice_test(
  state: &AppState,
  selected: Option<&str>,
  notes: &str,
) -> Result<String> {
  let name = require_playlist(selected)?;
  {
    let conn = db::try_lock(&state.db)?;
    PlaylistStore::new(&conn).find_by_name(name)?;
  }

  let text = dispatch(state, TaskKind::GenerateTest, notes, Some(name)).await?;

  let conn = db::try_lock(&state.db)?;
  TestRecords::new(&conn).save(name, &text)?;
  Ok(text)
}

pub async fn summarize(state: &AppState, selected: Option<&str>, notes: &str) -> Result<String> {
  let name = require_playlist(selected)?;
  let summary = dispatch(state, TaskKind::Summarize, notes, Some(name)).await?;
  Ok(format!("Summary of {}\n\n{}", name, summary))
}

pub async fn build_flashcards(
  state: &AppState,
  selected: Option<&str>,
  notes: &str,
) -> Result<FlashcardDeck> {
  let name = require_playlist(selected)?;
  let text = dispatch(state, TaskKind::CreateFlashcards, notes, Some(name)).await?;
  Ok(FlashcardDeck::parse(&text))
}

pub async fn analyze(state: &AppState, notes: &str) -> Result<String> {
  if notes.trim().is_empty() {
    return Err(StudyError::validation("Please enter some notes first"));
  }
  dispatch(state, TaskKind::AnalyzeNotes, notes, None).await
}

/// Store the posted editor buffer and return the selected playlist.
fn begin(state: &AppState, sid: &str, form: &WorkspaceForm) -> Option<String> {
  state.sessions.modify(sid, |session| {
    session.remember_editor(form);
    session.selected_playlist.clone()
  })
}

pub async fn ask_question(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<WorkspaceForm>,
) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);
  let selected = begin(&state, &sid, &form);

  let result = answer_question(&state, selected.as_deref(), &form.notes, &form.question).await;
  state.sessions.modify(&sid, |session| {
    record_outcome(session, "Failed to get answer", result, |session, text| {
      session.qa_output = Some(text);
    })
  });

  (jar, Redirect::to("/"))
}

pub async fn generate_test(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<WorkspaceForm>,
) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);
  let selected = begin(&state, &sid, &form);

  let result = generate_practice_test(&state, selected.as_deref(), &form.notes).await;
  state.sessions.modify(&sid, |session| {
    record_outcome(session, "Failed to generate test", result, |session, text| {
      session.test_output = Some(text);
    })
  });

  (jar, Redirect::to("/"))
}

pub async fn summarize_content(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<WorkspaceForm>,
) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);
  let selected = begin(&state, &sid, &form);

  let result = summarize(&state, selected.as_deref(), &form.notes).await;
  state.sessions.modify(&sid, |session| {
    record_outcome(session, "Failed to summarize content", result, |session, text| {
      session.analysis = Some(text);
    })
  });

  (jar, Redirect::to("/"))
}

pub async fn create_flashcards(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<WorkspaceForm>,
) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);
  let selected = begin(&state, &sid, &form);

  let result = build_flashcards(&state, selected.as_deref(), &form.notes).await;
  let created = result.is_ok();
  state.sessions.modify(&sid, |session| {
    record_outcome(session, "Failed to create flashcards", result, |session, deck| {
      if deck.is_empty() {
        session.notice = Some(Notice::warning(
          "No flashcards could be read from the response",
        ));
      }
      session.deck = Some(deck);
    })
  });

  let target = if created { "/flashcards" } else { "/" };
  (jar, Redirect::to(target))
}

pub async fn analyze_notes(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<WorkspaceForm>,
) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);
  begin(&state, &sid, &form);

  if !state.has_api_key() {
    state.sessions.modify(&sid, |session| {
      session.notice = Some(Notice::warning("Please set up your OpenAI API key first"));
    });
    return (jar, Redirect::to("/settings/api-key"));
  }

  let result = analyze(&state, &form.notes).await;
  state.sessions.modify(&sid, |session| {
    record_outcome(session, "AI analysis failed", result, |session, text| {
      session.analysis = Some(text);
    })
  });

  (jar, Redirect::to("/"))
}
