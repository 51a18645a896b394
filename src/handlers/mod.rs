pub mod ai;
pub mod flashcards;
pub mod notes;
pub mod playlists;
pub mod settings;
pub mod templates;

#[cfg(test)]
mod tests;

use askama::Template;
use axum::{
  extract::State,
  response::{Html, IntoResponse},
  routing::{get, post},
  Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SESSION_COOKIE_NAME;
use crate::db::{self, LogOnError};
use crate::error::StudyError;
use crate::paths;
use crate::services::{PlaylistStore, TestRecords};
use crate::session::{generate_session_id, Notice, StudySession};
use crate::state::AppState;

use templates::{IndexTemplate, PlaylistRow, WorkspaceForm};

pub use ai::{analyze_notes, ask_question, create_flashcards, generate_test, summarize_content};
pub use flashcards::{flashcards_page, flip_card, next_card, previous_card};
pub use notes::save_note;
pub use playlists::{add_playlist, select_playlist};
pub use settings::{api_key_page, save_api_key};

/// Build the application router.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/playlists", post(add_playlist))
    .route("/playlists/select", post(select_playlist))
    .route("/notes", post(save_note))
    .route("/ai/analyze", post(analyze_notes))
    .route("/ai/summarize", post(summarize_content))
    .route("/ai/test", post(generate_test))
    .route("/ai/flashcards", post(create_flashcards))
    .route("/ai/ask", post(ask_question))
    .route("/flashcards", get(flashcards_page))
    .route("/flashcards/next", post(next_card))
    .route("/flashcards/previous", post(previous_card))
    .route("/flashcards/flip", post(flip_card))
    .route("/settings/api-key", get(api_key_page).post(save_api_key))
    .nest_service("/static", ServeDir::new(paths::STATIC_DIR))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Read the session id cookie, issuing a new one if the browser has none.
pub(crate) fn session_id(jar: CookieJar) -> (CookieJar, String) {
  if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
    let id = cookie.value().to_string();
    return (jar, id);
  }

  let id = generate_session_id();
  let cookie = Cookie::build((SESSION_COOKIE_NAME, id.clone()))
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax);
  (jar.add(cookie), id)
}

/// Apply a successful result to the session, or turn the error into a notice.
pub(crate) fn record_outcome<T>(
  session: &mut StudySession,
  failure: &str,
  result: Result<T, StudyError>,
  apply: impl FnOnce(&mut StudySession, T),
) {
  match result {
    Ok(value) => apply(session, value),
    Err(e) => {
      tracing::warn!("{}: {}", failure, e);
      session.notice = Some(Notice::from_error(failure, &e));
    }
  }
}

impl StudySession {
  /// Keep what the editor held when the form was posted.
  pub(crate) fn remember_editor(&mut self, form: &WorkspaceForm) {
    self.note_title = form.note_title.clone();
    self.notes = form.notes.clone();
  }
}

pub async fn index(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);
  let (notice, session) = state
    .sessions
    .modify(&sid, |session| (session.take_notice(), session.clone()));

  let conn = match db::try_lock(&state.db) {
    Ok(conn) => conn,
    Err(_) => {
      return (
        jar,
        Html("<h1>Database Error</h1><p>Please refresh the page.</p>".to_string()),
      )
    }
  };

  let playlists = PlaylistStore::new(&conn)
    .list()
    .log_warn_default("Failed to list playlists");

  let selected = session
    .selected_playlist
    .as_deref()
    .and_then(|name| playlists.iter().find(|p| p.name == name));
  let embed_url = selected.and_then(|p| p.video().embed_url());
  let previous_tests = selected
    .map(|p| {
      TestRecords::new(&conn)
        .list_for_playlist(&p.name)
        .log_warn_default("Failed to list generated tests")
    })
    .unwrap_or_default();

  let rows = playlists
    .iter()
    .map(|p| PlaylistRow {
      name: p.name.clone(),
      url: p.url.clone(),
      selected: selected.is_some_and(|s| s.id == p.id),
      playable: p.video().is_playable(),
    })
    .collect();

  let template = IndexTemplate {
    notice,
    has_api_key: state.has_api_key(),
    playlists: rows,
    selected_playlist: selected.map(|p| p.name.clone()),
    embed_url,
    note_title: session.note_title,
    notes: session.notes,
    analysis: session.analysis,
    qa_output: session.qa_output,
    test_output: session.test_output,
    previous_tests,
  };

  (jar, Html(template.render().unwrap_or_default()))
}
