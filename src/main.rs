use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use study_assistant::config::{self, Settings};
use study_assistant::dispatch::{openai::OpenAiBackend, Dispatcher};
use study_assistant::state::AppState;
use study_assistant::{db, handlers};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "study_assistant=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let settings = Settings::load();

  let pool = db::init_db(&settings.db_path).expect("Failed to initialize database");
  tracing::info!("Using database {}", settings.db_path.display());

  let api_key = config::load_api_key(&settings.credentials_path);
  if api_key.is_none() {
    tracing::warn!(
      "No OpenAI API key found in {} or ${}; AI tools stay disabled until one is set",
      settings.credentials_path.display(),
      config::API_KEY_ENV
    );
  }

  let dispatcher = Dispatcher::new(Arc::new(OpenAiBackend::new(settings.api_base_url.clone())));
  let state = AppState::new(
    pool,
    dispatcher,
    api_key,
    settings.notes_dir.clone(),
    settings.credentials_path.clone(),
  );
  let app = handlers::router(state);

  let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", settings.bind_addr));

  tracing::info!("Server running on http://{}", settings.bind_addr);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
