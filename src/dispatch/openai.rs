//! OpenAI-compatible completion backend.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};
use super::{CompletionBackend, DispatchError};

/// Default OpenAI API endpoint.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct OpenAiBackend {
  client: Client,
  base_url: String,
}

impl OpenAiBackend {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      client: Client::new(),
      base_url: base_url.into(),
    }
  }

  fn endpoint(&self, path: &str) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }
}

impl Default for OpenAiBackend {
  fn default() -> Self {
    Self::new(DEFAULT_OPENAI_URL)
  }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
  async fn complete(
    &self,
    api_key: &str,
    request: &ChatCompletionRequest,
  ) -> Result<String, DispatchError> {
    let response = self
      .client
      .post(self.endpoint("/chat/completions"))
      .bearer_auth(api_key)
      .json(request)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let message = response
        .json::<ApiErrorResponse>()
        .await
        .map(|body| body.error.message)
        .unwrap_or_else(|_| "Unknown error".to_string());
      return Err(DispatchError::Request(format!(
        "OpenAI returned {}: {}",
        status, message
      )));
    }

    let body: ChatCompletionResponse = response
      .json()
      .await
      .map_err(|e| DispatchError::Request(format!("Failed to parse response: {}", e)))?;

    let content = body.first_content().ok_or(DispatchError::EmptyResponse)?;
    debug!("Completion received, {} chars", content.len());
    Ok(content)
  }
}
