use std::sync::Arc;

use crate::config::ServerConfig;
use crate::logging::RequestLogger;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc` and never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Request lifecycle logger.
    pub logger: Arc<dyn RequestLogger>,
}

impl AppState {
    pub fn new(config: ServerConfig, logger: Arc<dyn RequestLogger>) -> Self {
        Self {
            config: Arc::new(config),
            logger,
        }
    }
}
