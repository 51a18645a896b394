//! Playlist sidebar: add a playlist, pick one to play.

use axum::{
  extract::State,
  response::{IntoResponse, Redirect},
  Form,
};
use axum_extra::extract::CookieJar;

use crate::db;
use crate::error::StudyError;
use crate::services::PlaylistStore;
use crate::session::Notice;
use crate::state::AppState;

use super::templates::{AddPlaylistForm, SelectPlaylistForm};
use super::{record_outcome, session_id};

/// Add a playlist and make it the selected one, so its video starts playing.
pub async fn add_playlist(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<AddPlaylistForm>,
) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);

  let result = db::try_lock(&state.db)
    .map_err(StudyError::from)
    .and_then(|conn| PlaylistStore::new(&conn).add(&form.name, &form.url));

  state.sessions.modify(&sid, |session| {
    record_outcome(session, "Failed to add playlist", result, |session, playlist| {
      if !playlist.video().is_playable() {
        session.notice = Some(Notice::info(format!(
          "Added '{}', but its URL has no playable video",
          playlist.name
        )));
      }
      session.selected_playlist = Some(playlist.name);
    })
  });

  (jar, Redirect::to("/"))
}

pub async fn select_playlist(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<SelectPlaylistForm>,
) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);

  let result = db::try_lock(&state.db)
    .map_err(StudyError::from)
    .and_then(|conn| PlaylistStore::new(&conn).find_by_name(&form.name));

  state.sessions.modify(&sid, |session| {
    record_outcome(session, "Failed to open playlist", result, |session, playlist| {
      session.selected_playlist = Some(playlist.name);
    })
  });

  (jar, Redirect::to("/"))
}
