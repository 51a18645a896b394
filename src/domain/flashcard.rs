//! Flashcards parsed from generated text, and the deck used to page through them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
  pub front: String,
  pub back: String,
}

/// Ordered flashcards with a cursor and the side currently shown.
///
/// The cursor only moves through `next`/`previous`, which saturate at the
/// ends. Every successful move shows the new card front first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardDeck {
  cards: Vec<Flashcard>,
  cursor: usize,
  showing_front: bool,
}

impl Default for FlashcardDeck {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl FlashcardDeck {
  pub fn new(cards: Vec<Flashcard>) -> Self {
    Self {
      cards,
      cursor: 0,
      showing_front: true,
    }
  }

  /// Build a deck from `Front: ... | Back: ...` lines.
  ///
  /// Lines without a `|` are skipped, so partial or chatty model output never
  /// fails. An empty deck is a valid result.
  pub fn parse(text: &str) -> Self {
    let cards = text
      .lines()
      .filter_map(|line| {
        let (front, back) = line.split_once('|')?;
        Some(Flashcard {
          front: strip_label(front, "front"),
          back: strip_label(back, "back"),
        })
      })
      .collect();
    Self::new(cards)
  }

  pub fn cards(&self) -> &[Flashcard] {
    &self.cards
  }

  pub fn len(&self) -> usize {
    self.cards.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cards.is_empty()
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn showing_front(&self) -> bool {
    self.showing_front
  }

  pub fn current(&self) -> Option<&Flashcard> {
    self.cards.get(self.cursor)
  }

  /// Text of the side currently shown.
  pub fn visible_text(&self) -> Option<&str> {
    self.current().map(|card| {
      if self.showing_front {
        card.front.as_str()
      } else {
        card.back.as_str()
      }
    })
  }

  /// "Card 3 of 10", or `None` for an empty deck.
  pub fn position_label(&self) -> Option<String> {
    if self.is_empty() {
      None
    } else {
      Some(format!("Card {} of {}", self.cursor + 1, self.len()))
    }
  }

  pub fn is_first(&self) -> bool {
    self.cursor == 0
  }

  pub fn is_last(&self) -> bool {
    self.cursor + 1 >= self.len()
  }

  pub fn flip(&mut self) {
    if !self.is_empty() {
      self.showing_front = !self.showing_front;
    }
  }

  pub fn next(&mut self) {
    if self.cursor + 1 < self.len() {
      self.cursor += 1;
      self.showing_front = true;
    }
  }

  pub fn previous(&mut self) {
    if self.cursor > 0 {
      self.cursor -= 1;
      self.showing_front = true;
    }
  }
}

/// Trim a side and drop its leading `Front:`/`Back:` label.
///
/// The label match ignores case and whitespace before the colon.
fn strip_label(side: &str, label: &str) -> String {
  let trimmed = side.trim();
  let Some(head) = trimmed.get(..label.len()) else {
    return trimmed.to_string();
  };
  if !head.eq_ignore_ascii_case(label) {
    return trimmed.to_string();
  }
  match trimmed[label.len()..].trim_start().strip_prefix(':') {
    Some(rest) => rest.trim().to_string(),
    None => trimmed.to_string(),
  }
}
