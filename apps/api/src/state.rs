use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    pub sessions: SessionStore,
}
