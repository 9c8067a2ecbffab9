//! # Module: JSON Transport
//!
//! ## Responsibility
//! The single request path every resource client goes through: build the
//! URL, attach JSON headers, perform the call, and normalize success/error
//! into a typed result. Response interpretation is a pure function of
//! `(status, body)` so it is testable without a network.
//!
//! ## Guarantees
//! - `204 No Content` resolves to "no value" without attempting JSON decode
//! - A non-2xx response surfaces the body's `detail` field when present,
//!   falling back to the HTTP status text, then a generic failure string
//! - No panics on any response shape

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use crate::config::ConsoleConfig;

/// Message used when a non-2xx response has neither a `detail` field nor a
/// known status text.
const GENERIC_FAILURE: &str = "Request failed";

/// JSON-over-HTTP transport bound to one API base URL.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    base_url: String,
}

impl Transport {
    /// Builds a transport from the resolved console configuration.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] if the underlying client cannot be
    /// constructed (e.g. no TLS backend).
    pub fn new(config: &ConsoleConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base.clone(),
        })
    }

    /// Resolves a request path against the API base.
    ///
    /// Absolute URLs (`http…`) pass through untouched; anything else is
    /// appended to the base.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Performs a JSON request and decodes the response body, if any.
    ///
    /// # Returns
    /// - `Ok(Some(T))` for a 2xx response with a body
    /// - `Ok(None)` for `204 No Content` (or an empty 2xx body)
    ///
    /// # Errors
    /// [`ApiError::Server`] for non-2xx, [`ApiError::Transport`] for network
    /// failures, [`ApiError::Decode`] for undecodable bodies.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<T>, ApiError> {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "api request");

        let mut builder = self
            .client
            .request(method.clone(), url.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let value = interpret_response(status, &bytes);
        if let Err(err) = &value {
            tracing::warn!(method = %method, url = %url, error = %err, "api request failed");
        }

        match value? {
            None => Ok(None),
            Some(v) => serde_json::from_value(v)
                .map(Some)
                .map_err(|e| ApiError::Decode(e.to_string())),
        }
    }

    /// `GET` expecting a body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        require_body(self.request(Method::GET, path, None).await?)
    }

    /// `POST` with a JSON body, expecting a body back.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        require_body(self.request(Method::POST, path, Some(body)).await?)
    }

    /// `PUT` with a JSON body, expecting a body back.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        require_body(self.request(Method::PUT, path, Some(body)).await?)
    }

    /// `DELETE`; tolerates both `204` and any 2xx body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let _: Option<Value> = self.request(Method::DELETE, path, None).await?;
        Ok(())
    }
}

/// Serializes a request body to a JSON value.
fn encode_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Promotes an optional body to a required one.
fn require_body<T>(value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::Decode("expected a response body".to_string()))
}

/// Pure success/error interpretation of a completed HTTP exchange.
///
/// # Returns
/// - `Ok(None)` for `204 No Content` or an empty 2xx body
/// - `Ok(Some(value))` for a decodable 2xx body
///
/// # Errors
/// - [`ApiError::Decode`] for an undecodable 2xx body
/// - [`ApiError::Server`] for any non-2xx status, with the message taken
///   from the body's `detail` field, then the status text, then a generic
///   failure string
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<Option<Value>, ApiError> {
    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }
    if status.is_success() {
        if body.is_empty() {
            return Ok(None);
        }
        return serde_json::from_slice(body)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()));
    }
    Err(ApiError::Server {
        status: status.as_u16(),
        message: error_message(status, body),
    })
}

/// Extracts the display message for a non-2xx response.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        if let Some(detail) = value.get("detail").and_then(Value::as_str) {
            return detail.to_string();
        }
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport_with_base(base: &str) -> Transport {
        let config = ConsoleConfig {
            api_base: base.to_string(),
            ..ConsoleConfig::default()
        };
        Transport::new(&config).expect("client builds")
    }

    #[test]
    fn test_url_appends_relative_path_to_base() {
        let transport = transport_with_base("http://localhost:8000");
        assert_eq!(transport.url("/brands"), "http://localhost:8000/brands");
    }

    #[test]
    fn test_url_passes_absolute_through() {
        let transport = transport_with_base("http://localhost:8000");
        assert_eq!(
            transport.url("http://other:9000/health"),
            "http://other:9000/health"
        );
    }

    #[test]
    fn test_interpret_204_resolves_without_decoding() {
        // The body is deliberately invalid JSON: a 204 must never touch it.
        let result = interpret_response(StatusCode::NO_CONTENT, b"not json at all");
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_interpret_2xx_with_body() {
        let result = interpret_response(StatusCode::OK, br#"{"status":"ok"}"#)
            .expect("2xx decodes");
        assert_eq!(result, Some(serde_json::json!({"status": "ok"})));
    }

    #[test]
    fn test_interpret_2xx_empty_body_is_no_value() {
        let result = interpret_response(StatusCode::OK, b"");
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_interpret_2xx_garbage_body_is_decode_error() {
        let result = interpret_response(StatusCode::OK, b"<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_interpret_error_uses_detail_field() {
        let result =
            interpret_response(StatusCode::NOT_FOUND, br#"{"detail":"Brand not found"}"#);
        match result {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Brand not found");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_error_falls_back_to_status_text() {
        let result = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, b"");
        match result {
            Err(ApiError::Server { message, .. }) => {
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_error_non_string_detail_falls_back() {
        let result =
            interpret_response(StatusCode::UNPROCESSABLE_ENTITY, br#"{"detail":[{"loc":[]}]}"#);
        match result {
            Err(ApiError::Server { message, .. }) => {
                assert_eq!(message, "Unprocessable Entity");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_error_unknown_status_uses_generic_message() {
        let status = StatusCode::from_u16(599).expect("valid code");
        let result = interpret_response(status, b"");
        match result {
            Err(ApiError::Server { message, .. }) => {
                assert_eq!(message, GENERIC_FAILURE);
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }
}
