use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Production: GeminiClient. Tests: stub.
    pub llm: Arc<dyn TextGenerator>,
    /// Kept for handlers that need runtime settings beyond the provider key.
    #[allow(dead_code)]
    pub config: Config,
}
