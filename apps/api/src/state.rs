use std::sync::Arc;

use crate::config::Config;
use crate::writing::Writer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The writing pipeline. Read-only after startup.
    pub writer: Arc<Writer>,
    pub config: Config,
}
