//! Request lifecycle logging.
//!
//! Handlers log through a [`RequestLogger`] carried in
//! [`AppState`](crate::state::AppState) instead of calling a process-wide
//! logger directly, so tests can swap in a recording implementation.

use std::error::Error;

/// Sink for the per-request receipt and completion lines.
pub trait RequestLogger: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str, err: Option<&(dyn Error + 'static)>);
}

/// Production logger forwarding to `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str, err: Option<&(dyn Error + 'static)>) {
        match err {
            Some(err) => tracing::error!(error = %err, "{message}"),
            None => tracing::error!("{message}"),
        }
    }
}
