//! HTTP transport for Chargelink
//!
//! A single shared HTTP client used by every endpoint group. It attaches the
//! persisted bearer credential to each outgoing request, detects
//! authorization failures centrally, and normalizes all failures into one
//! error shape carrying a human-readable message.

use crate::config::ServerConfig;
use crate::credentials::CredentialStore;
use crate::error::{ChargelinkError, Result};
use crate::logging::get_logger;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Fallback message when neither the response body nor the transport layer
/// provides one
const REQUEST_FAILED: &str = "Request failed";

/// Shared HTTP transport with credential injection
pub struct ApiTransport {
    base_url: String,
    client: reqwest::Client,
    credentials: Arc<RwLock<CredentialStore>>,
    logger: crate::logging::StructuredLogger,
}

impl ApiTransport {
    /// Create a new transport bound to a server and a credential store
    pub fn new(server: &ServerConfig, credentials: Arc<RwLock<CredentialStore>>) -> Result<Self> {
        let logger = get_logger("transport");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(server.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url: server.base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
            logger,
        })
    }

    /// Base URL this transport talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current bearer token, if one is stored
    pub async fn token(&self) -> Option<String> {
        self.credentials.read().await.token().map(str::to_string)
    }

    /// Issue a request and decode the JSON response body.
    ///
    /// A missing token sends the request unauthenticated; the server decides
    /// rejection. A 401 response is logged here and surfaced as an auth error,
    /// with no retry or redirect.
    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.join_url(path);

        let mut builder = self.client.request(method, url.as_str());
        if let Some(token) = self.token().await {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ChargelinkError::network(normalize_transport_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = extract_error_message(status, &body_text);
            if status == StatusCode::UNAUTHORIZED {
                self.logger
                    .error(&format!("Unauthorized request to {}: {}", url, message));
                return Err(ChargelinkError::auth(message));
            }
            return Err(ChargelinkError::api(message));
        }

        let value = response.json::<T>().await?;
        Ok(value)
    }

    /// GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    /// POST request with optional JSON body
    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, body).await
    }

    /// PUT request with optional JSON body
    pub async fn put<B, T>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, body).await
    }

    /// DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::DELETE, path, None).await
    }

    fn join_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Pick the best available message for a failed response: the body's
/// `message` field, then the HTTP status, then a generic fallback
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value.get("message").and_then(|m| m.as_str())
        && !message.is_empty()
    {
        return message.to_string();
    }

    match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => REQUEST_FAILED.to_string(),
    }
}

/// Message for failures below the HTTP layer (connect, timeout, decode)
fn normalize_transport_error(err: &reqwest::Error) -> String {
    let text = err.to_string();
    if text.is_empty() {
        REQUEST_FAILED.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn transport() -> ApiTransport {
        let credentials = Arc::new(RwLock::new(CredentialStore::new("/tmp/unused.json")));
        ApiTransport::new(
            &ServerConfig {
                base_url: "http://localhost:8080/".to_string(),
                timeout_seconds: 5,
            },
            credentials,
        )
        .unwrap()
    }

    #[test]
    fn join_url_strips_trailing_slash() {
        let t = transport();
        assert_eq!(
            t.join_url("/api/pricing/current"),
            "http://localhost:8080/api/pricing/current"
        );
        assert_eq!(t.join_url("api/queue/user"), "http://localhost:8080/api/queue/user");
    }

    #[test]
    fn error_message_prefers_body_message() {
        let msg = extract_error_message(
            StatusCode::BAD_REQUEST,
            r#"{"message":"battery capacity not set"}"#,
        );
        assert_eq!(msg, "battery capacity not set");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        let msg = extract_error_message(StatusCode::INTERNAL_SERVER_ERROR, "not json");
        assert_eq!(msg, "HTTP 500 Internal Server Error");

        let msg = extract_error_message(StatusCode::NOT_FOUND, r#"{"error":"no message field"}"#);
        assert_eq!(msg, "HTTP 404 Not Found");
    }

    #[tokio::test]
    async fn token_absent_by_default() {
        let t = transport();
        assert!(t.token().await.is_none());
    }
}
