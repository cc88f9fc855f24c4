use crate::llm_client::GeminiClient;

/// Shared application state injected into route handlers via Axum extractors.
/// Nothing here is mutable — each request owns its own buffers.
#[derive(Clone)]
pub struct AppState {
    pub llm: GeminiClient,
}
