//! Flashcard pager: show the current card, flip it, move between cards.

use askama::Template;
use axum::{
  extract::State,
  response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;

use crate::domain::FlashcardDeck;
use crate::state::AppState;

use super::session_id;
use super::templates::FlashcardsTemplate;

pub async fn flashcards_page(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  let (jar, sid) = session_id(jar);
  let (deck, notice, playlist) = state.sessions.modify(&sid, |session| {
    (
      session.deck.clone(),
      session.take_notice(),
      session.selected_playlist.clone(),
    )
  });

  let template = match deck {
    Some(deck) => FlashcardsTemplate {
      notice,
      has_deck: !deck.is_empty(),
      text: deck.visible_text().map(str::to_string),
      position_label: deck.position_label(),
      showing_front: deck.showing_front(),
      is_first: deck.is_first(),
      is_last: deck.is_last(),
      playlist,
    },
    None => FlashcardsTemplate {
      notice,
      has_deck: false,
      text: None,
      position_label: None,
      showing_front: true,
      is_first: true,
      is_last: true,
      playlist,
    },
  };

  (jar, Html(template.render().unwrap_or_default()))
}

fn update_deck(state: &AppState, jar: CookieJar, step: fn(&mut FlashcardDeck)) -> (CookieJar, Redirect) {
  let (jar, sid) = session_id(jar);
  state.sessions.modify(&sid, |session| {
    if let Some(deck) = session.deck.as_mut() {
      step(deck);
    }
  });
  (jar, Redirect::to("/flashcards"))
}

pub async fn next_card(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  update_deck(&state, jar, FlashcardDeck::next)
}

pub async fn previous_card(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  update_deck(&state, jar, FlashcardDeck::previous)
}

pub async fn flip_card(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
  update_deck(&state, jar, FlashcardDeck::flip)
}
