use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
