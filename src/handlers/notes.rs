use axum::{
  extract::State,
  response::{IntoResponse, Redirect},
  Form,
};
use axum_extra::extract::CookieJar;

use crate::services;
use crate::session::Notice;
use crate::state::AppState;

use super::templates::WorkspaceForm;
use super::{record_outcome, session_id};

/// Write the editor contents to the notes directory.
pub async fn save_note(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<WorkspaceForm>,
) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);
  let result = services::save_note(&state.notes_dir, &form.note_title, &form.notes);

  state.sessions.modify(&sid, |session| {
    session.remember_editor(&form);
    record_outcome(session, "Failed to save note", result, |session, _path| {
      session.notice = Some(Notice::info("Note saved successfully!"));
    })
  });

  (jar, Redirect::to("/"))
}
