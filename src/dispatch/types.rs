//! Chat completion request and response types (OpenAI wire format).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  System,
  User,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
  pub role: Role,
  pub content: String,
}

impl ChatMessage {
  pub fn system(content: impl Into<String>) -> Self {
    Self {
      role: Role::System,
      content: content.into(),
    }
  }

  pub fn user(content: impl Into<String>) -> Self {
    Self {
      role: Role::User,
      content: content.into(),
    }
  }
}

/// Request body for the chat completions endpoint.
///
/// Sampling parameters are left to the provider defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
  pub model: String,
  pub messages: Vec<ChatMessage>,
}

/// Response from the chat completions endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
  #[serde(default)]
  pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
  pub message: ChatChoiceMessage,
}

/// Assistant message inside a choice. Content may be null.
#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
  #[serde(default)]
  pub content: Option<String>,
}

impl ChatCompletionResponse {
  /// Content of the first choice, if any.
  pub fn first_content(self) -> Option<String> {
    self.choices.into_iter().next().and_then(|c| c.message.content)
  }
}

/// Error body returned by the API on non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
  pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
  pub message: String,
}
