//! API key setup form.

use askama::Template;
use axum::{
  extract::State,
  response::{Html, IntoResponse, Redirect, Response},
  Form,
};
use axum_extra::extract::CookieJar;

use crate::config;
use crate::session::Notice;
use crate::state::AppState;

use super::session_id;
use super::templates::{ApiKeyForm, ApiKeyTemplate};

pub async fn api_key_page(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);
  let notice = state.sessions.modify(&sid, |session| session.take_notice());

  let template = ApiKeyTemplate {
    notice,
    configured: state.has_api_key(),
    error: None,
  };
  (jar, Html(template.render().unwrap_or_default()))
}

/// Persist the key to the credentials file and use it from now on.
pub async fn save_api_key(
  State(state): State<AppState>,
  jar: CookieJar,
  Form(form): Form<ApiKeyForm>,
) -> Response {
  let (jar, sid) = session_id(jar);
  let api_key = form.api_key.trim();

  let error = if api_key.is_empty() {
    Some("Please enter an API key".to_string())
  } else if let Err(e) = config::save_api_key(&state.credentials_path, api_key) {
    tracing::warn!(
      "Failed to write {}: {}",
      state.credentials_path.display(),
      e
    );
    Some(format!("Failed to save API key: {}", e))
  } else {
    None
  };

  if let Some(error) = error {
    let template = ApiKeyTemplate {
      notice: None,
      configured: state.has_api_key(),
      error: Some(error),
    };
    return (jar, Html(template.render().unwrap_or_default())).into_response();
  }

  state.set_api_key(api_key.to_string());
  tracing::info!("API key saved to {}", state.credentials_path.display());
  state.sessions.modify(&sid, |session| {
    session.notice = Some(Notice::info("API key saved"));
  });

  (jar, Redirect::to("/")).into_response()
}
