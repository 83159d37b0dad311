use crate::chat::ChatProxy;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Chat proxy wrapping the configured provider.
    pub chat: ChatProxy,
}
