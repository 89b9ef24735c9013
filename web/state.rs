use std::sync::Arc;

use freshness_lens::{Estimator, UploadConfig};

/// Everything a request handler needs. Read-only once the server starts.
pub struct AppState {
    pub config:    UploadConfig,
    pub estimator: Estimator,
}

impl AppState {
    pub fn new(config: UploadConfig) -> Self {
        AppState { config, estimator: Estimator::new() }
    }
}

/// Shared state type, an `Arc<AppState>` passed to every handler.
pub type SharedState = Arc<AppState>;
