//! The `query` parameter of a conversion request.
//!
//! The parameter arrives untyped. Extraction never rejects a request: a
//! missing or repeated value simply coerces to NaN and is turned away by the
//! converter's validation with the usual `InvalidInput` response.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use numerals_core::coerce::coerce_to_number;

/// Name of the query-string key carrying the number to convert.
pub const QUERY_PARAM: &str = "query";

/// Raw `query` value of a single conversion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionRequest {
    /// No `query` key in the query string.
    Missing,
    /// Exactly one `query` value, kept verbatim.
    Value(String),
    /// `query` given more than once.
    Repeated(Vec<String>),
}

impl ConversionRequest {
    /// Collect the `query` values out of decoded query-string pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == QUERY_PARAM)
            .map(|(_, value)| value)
            .collect();

        match values.len() {
            0 => ConversionRequest::Missing,
            1 => ConversionRequest::Value(values.remove(0)),
            _ => ConversionRequest::Repeated(values),
        }
    }

    /// The single raw value, if there is exactly one.
    pub fn raw(&self) -> Option<&str> {
        match self {
            ConversionRequest::Value(raw) => Some(raw),
            _ => None,
        }
    }

    /// Numeric value the converter receives.
    pub fn numeric_value(&self) -> f64 {
        self.raw().map_or(f64::NAN, coerce_to_number)
    }
}

impl<S> FromRequestParts<S> for ConversionRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Ok(ConversionRequest::from_pairs(pairs))
    }
}
