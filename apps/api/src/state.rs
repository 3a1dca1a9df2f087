use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend behind a trait object so tests can script replies.
    pub llm: Arc<dyn CompletionBackend>,
    /// Loaded configuration, kept for handlers that need runtime settings.
    #[allow(dead_code)]
    pub config: Config,
    /// Single-permit slot: at most one kit generation in flight at a time.
    /// A second concurrent generate request is rejected with 409 CONFLICT.
    pub generation_slot: Arc<Semaphore>,
}
