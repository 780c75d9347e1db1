//! REST API client for the well telemetry backend
//!
//! One `ApiClient` method per backend endpoint, grouped by concern:
//! - auth: login
//! - dashboard: overview, production history, realtime metrics
//! - telemetry: readings, batches, per-well stats
//! - wells: wells and the fields that group them
//! - reports: daily report lifecycle
//! - alerts: alerts, anomalies, resolution
//! - system: backend info and liveness
//!
//! Every method returns the raw `reqwest::Response`. The client attaches
//! the bearer token (when one is stored) and the JSON content type, then
//! gets out of the way: no retries, no response parsing, no status
//! interpretation. A 404 or 500 is an ordinary `Ok(response)`; only
//! transport failures surface as `Err`.

pub mod alerts;
pub mod auth;
pub mod dashboard;
pub mod reports;
pub mod system;
pub mod telemetry;
pub mod wells;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header;

use crate::token::{Anonymous, TokenProvider};

/// API client errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

// ============================================================================
// Bearer Auth Middleware
// ============================================================================

/// Attaches the stored bearer token to outgoing requests.
///
/// The token is read from the provider on every request, so a login or
/// logout between two calls takes effect immediately. When no token is
/// stored the request goes out unauthenticated; that path is how the
/// login call itself works.
#[derive(Clone)]
pub struct BearerAuth {
    provider: Arc<dyn TokenProvider>,
}

impl BearerAuth {
    pub fn new(provider: Arc<dyn TokenProvider>) -> Self {
        Self { provider }
    }

    /// Add the Authorization header if a token is currently stored.
    pub fn apply(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.provider.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the telemetry backend
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: BearerAuth,
}

impl ApiClient {
    /// Create a client with default settings for the given backend.
    pub fn new(
        base_url: impl Into<String>,
        provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiError> {
        Self::builder()
            .base_url(base_url)
            .token_provider(provider)
            .build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for `{base_url}{path}` with auth applied.
    ///
    /// Every endpoint method funnels through here, so the token lookup
    /// happens exactly once per request.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.auth.apply(self.http.request(method, url))
    }
}

/// Builder for ApiClient
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    provider: Arc<dyn TokenProvider>,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            provider: Arc::new(Anonymous),
        }
    }
}

impl ApiClientBuilder {
    /// Set the base URL (required)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (default 30s)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the token provider (default: anonymous, no Authorization header)
    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ApiError::Configuration("base_url is required".into()))?;

        // Paths all start with '/', so the base must not end with one.
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(ApiClient {
            http,
            base_url,
            auth: BearerAuth::new(self.provider),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::StaticToken;

    #[test]
    fn test_builder_requires_base_url() {
        let result = ApiClient::builder().build();
        assert!(
            matches!(result, Err(ApiError::Configuration(_))),
            "builder without base_url should fail with a configuration error"
        );
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = ApiClient::builder()
            .base_url("http://localhost:9110/api/v1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9110/api/v1");
    }

    #[test]
    fn test_bearer_auth_adds_header_when_token_present() {
        let auth = BearerAuth::new(Arc::new(StaticToken::new("tok-123")));
        let http = reqwest::Client::new();

        let req = auth
            .apply(http.get("http://localhost/x"))
            .build()
            .unwrap();

        let header = req.headers().get("authorization").unwrap();
        assert_eq!(header, "Bearer tok-123");
    }

    #[test]
    fn test_bearer_auth_skips_header_when_no_token() {
        let auth = BearerAuth::new(Arc::new(Anonymous));
        let http = reqwest::Client::new();

        let req = auth
            .apply(http.get("http://localhost/x"))
            .build()
            .unwrap();

        assert!(
            req.headers().get("authorization").is_none(),
            "anonymous requests must carry no Authorization header"
        );
    }

    #[test]
    fn test_new_wires_provider_and_base_url() {
        let client = ApiClient::new(
            "http://localhost:9110/api/v1",
            Arc::new(StaticToken::new("t")),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9110/api/v1");
    }
}
