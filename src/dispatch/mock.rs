//! Scripted completion backend for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::types::ChatCompletionRequest;
use super::{CompletionBackend, DispatchError};

/// Returns a fixed reply (or error) and records every request it receives.
#[derive(Clone)]
pub struct MockBackend {
  reply: Result<String, DispatchError>,
  calls: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl MockBackend {
  pub fn replying(reply: impl Into<String>) -> Self {
    Self {
      reply: Ok(reply.into()),
      calls: Arc::new(Mutex::new(Vec::new())),
    }
  }

  pub fn failing(error: DispatchError) -> Self {
    Self {
      reply: Err(error),
      calls: Arc::new(Mutex::new(Vec::new())),
    }
  }

  pub fn calls(&self) -> Vec<ChatCompletionRequest> {
    self.calls.lock().unwrap().clone()
  }
}

#[async_trait]
impl CompletionBackend for MockBackend {
  async fn complete(
    &self,
    _api_key: &str,
    request: &ChatCompletionRequest,
  ) -> Result<String, DispatchError> {
    self.calls.lock().unwrap().push(request.clone());
    self.reply.clone()
  }
}
