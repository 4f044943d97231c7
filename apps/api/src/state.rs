use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Production wires in `GeminiClient`; tests
    /// substitute fakes to drive the success and failure paths.
    pub generator: Arc<dyn TextGenerator>,
}
