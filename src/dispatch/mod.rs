//! Prompt dispatch to the completion API.
//!
//! Each [`TaskKind`] is bound to a fixed system instruction and a user
//! message template. [`Dispatcher::dispatch`] builds the two-message exchange
//! and hands it to a [`CompletionBackend`]. Failures are returned as-is:
//! there is no retry and no rate limiting.

mod error;
#[cfg(test)]
pub mod mock;
pub mod openai;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config;

pub use error::DispatchError;
pub use openai::OpenAiBackend;
pub use types::{ChatCompletionRequest, ChatMessage, Role};

/// Something that turns a chat request into a single completion.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
  async fn complete(
    &self,
    api_key: &str,
    request: &ChatCompletionRequest,
  ) -> Result<String, DispatchError>;
}

/// Purpose of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
  Qa,
  GenerateTest,
  Summarize,
  CreateFlashcards,
  AnalyzeNotes,
}

impl TaskKind {
  pub const ALL: [TaskKind; 5] = [
    TaskKind::Qa,
    TaskKind::GenerateTest,
    TaskKind::Summarize,
    TaskKind::CreateFlashcards,
    TaskKind::AnalyzeNotes,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Qa => "qa",
      Self::GenerateTest => "generate_test",
      Self::Summarize => "summarize",
      Self::CreateFlashcards => "create_flashcards",
      Self::AnalyzeNotes => "analyze_notes",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|task| task.as_str() == s)
  }

  /// System-role instruction describing the expected output.
  pub fn instruction(&self) -> &'static str {
    match self {
      Self::Qa => {
        "You are a knowledgeable study assistant. Answer questions based on the provided context."
      }
      Self::GenerateTest => {
        "Create a practice test with 5 questions based on the provided content. Include both questions and answers."
      }
      Self::Summarize => {
        "Create a concise summary of the provided content, highlighting key points and concepts."
      }
      Self::CreateFlashcards => {
        "Create a set of 10 flashcards based on the content. Format as 'Front: [question/term] | Back: [answer/definition]'"
      }
      Self::AnalyzeNotes => {
        "You are a helpful study assistant. Analyze the student's notes and provide:\n1. Key concepts identified\n2. Areas that need clarification\n3. Suggestions for further study\n4. Learning objectives achieved"
      }
    }
  }

  /// User-role message for `content`, prefixed by the context block if any.
  ///
  /// For Q&A the context is the notes and the content is the question; for
  /// the content tasks the context is the playlist name.
  pub fn user_message(&self, content: &str, context: Option<&str>) -> String {
    match (self, context) {
      (Self::AnalyzeNotes, _) => format!("Please analyze these study notes:\n\n{}", content),
      (Self::Qa, Some(context)) => format!("Context:\n{}\n\nQuestion: {}", context, content),
      (_, Some(context)) => format!("Content for {}:\n{}", context, content),
      (_, None) => content.to_string(),
    }
  }
}

#[derive(Clone)]
pub struct Dispatcher {
  backend: Arc<dyn CompletionBackend>,
  model: String,
}

impl Dispatcher {
  pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
    Self {
      backend,
      model: config::COMPLETION_MODEL.to_string(),
    }
  }

  pub fn model(&self) -> &str {
    &self.model
  }

  /// The system + user exchange sent for a task.
  pub fn build_request(
    &self,
    task: TaskKind,
    content: &str,
    context: Option<&str>,
  ) -> ChatCompletionRequest {
    ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![
        ChatMessage::system(task.instruction()),
        ChatMessage::user(task.user_message(content, context)),
      ],
    }
  }

  /// Run one request/response exchange for `task`.
  ///
  /// Fails without touching the network when no credential is configured.
  pub async fn dispatch(
    &self,
    credential: Option<&str>,
    task: TaskKind,
    content: &str,
    context: Option<&str>,
  ) -> Result<String, DispatchError> {
    let api_key = credential
      .map(str::trim)
      .filter(|key| !key.is_empty())
      .ok_or(DispatchError::MissingCredential)?;

    let request = self.build_request(task, content, context);
    debug!(
      "Dispatching {} with model {}, content length: {}",
      task.as_str(),
      self.model,
      content.len()
    );

    let text = self
      .backend
      .complete(api_key, &request)
      .await
      .inspect_err(|e| warn!("Dispatch {} failed: {}", task.as_str(), e))?;

    if text.trim().is_empty() {
      warn!("Dispatch {} returned an empty completion", task.as_str());
      return Err(DispatchError::EmptyResponse);
    }
    Ok(text)
  }
}
