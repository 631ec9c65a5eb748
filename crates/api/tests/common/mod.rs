#![allow(dead_code)]

use std::error::Error;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use numerals_api::config::{LogFormat, ServerConfig};
use numerals_api::logging::RequestLogger;
use numerals_api::router::{app_routes, build_app_router, with_middleware};
use numerals_api::state::AppState;

/// A single line captured by [`RecordingLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    Info(String),
    Error { message: String, err: Option<String> },
}

/// Test double that keeps every request log line in memory.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<LogLine>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().unwrap().clone()
    }
}

impl RequestLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(LogLine::Info(message.to_string()));
    }

    fn error(&self, message: &str, err: Option<&(dyn Error + 'static)>) {
        self.lines.lock().unwrap().push(LogLine::Error {
            message: message.to_string(),
            err: err.map(|e| e.to_string()),
        });
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router with a recording logger.
///
/// Returns the logger so tests can assert on what the handlers logged.
pub fn build_test_app() -> (Router, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::default());
    let state = AppState::new(test_config(), logger.clone());
    (build_app_router(state), logger)
}

/// Build the application with extra routes behind the same middleware stack.
///
/// Used to drive the timeout and panic layers with handlers the service
/// itself never exposes.
pub fn build_test_app_with_routes(
    config: ServerConfig,
    extra: Router<AppState>,
) -> (Router, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::default());
    let state = AppState::new(config, logger.clone());
    (with_middleware(app_routes().merge(extra), state), logger)
}

/// Send a request with the given method and an empty body.
pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
