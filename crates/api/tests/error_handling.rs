//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use numerals_api::error::AppError;
use numerals_api::router::panic_response;
use numerals_core::error::CoreError;
use numerals_core::roman::convert;

/// Helper: convert a response into its status code and parsed JSON body.
async fn into_parts(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::InvalidInput maps to 400 with the validation message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_input_returns_400() {
    let err = convert(0.0).unwrap_err();
    assert_matches!(err, CoreError::InvalidInput(_));

    let (status, json) = into_parts(AppError::from(err).into_response()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        serde_json::json!({
            "error": "Invalid Input: Number must be an integer between 1 and 3999"
        })
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::Computation maps to 500 and hides the detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn computation_error_returns_500_and_sanitizes() {
    let err = AppError::Core(CoreError::Computation("units digit 12 has no table entry".into()));

    let (status, json) = into_parts(err.into_response()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Computational error during Roman numeral conversion");
    assert!(!json.to_string().contains("units digit"));
}

// ---------------------------------------------------------------------------
// Test: AppError::NotFound maps to 404 with the fixed message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_returns_404() {
    let (status, json) = into_parts(AppError::NotFound.into_response()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "Sorry, can't find that" }));
}

// ---------------------------------------------------------------------------
// Test: AppError::Internal maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Internal("secret configuration leaked".into());

    let (status, json) = into_parts(err.into_response()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
    assert!(
        !json.to_string().contains("secret"),
        "Internal error response must not leak sensitive details"
    );
}

// ---------------------------------------------------------------------------
// Test: caught panics render as the generic internal error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn panic_payload_renders_as_internal_error() {
    let response = panic_response(Box::new("index out of bounds"));

    let (status, json) = into_parts(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "An internal error occurred" }));
}
