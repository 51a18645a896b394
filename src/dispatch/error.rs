/// Why a dispatch produced no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
  /// No API key configured.
  MissingCredential,
  /// Transport failure or an error status from the API.
  Request(String),
  /// The API answered without a completion.
  EmptyResponse,
}

impl DispatchError {
  /// The underlying reason, shown verbatim to the user.
  pub fn reason(&self) -> String {
    self.to_string()
  }
}

impl std::fmt::Display for DispatchError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DispatchError::MissingCredential => write!(f, "No OpenAI API key is configured"),
      DispatchError::Request(reason) => write!(f, "{}", reason),
      DispatchError::EmptyResponse => write!(f, "The model returned no completion"),
    }
  }
}

impl std::error::Error for DispatchError {}

impl From<reqwest::Error> for DispatchError {
  fn from(e: reqwest::Error) -> Self {
    DispatchError::Request(format!("Request failed: {}", e))
  }
}
