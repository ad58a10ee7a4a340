//! Main algod API client implementation.

use crate::api::{NodeApi, ParticipationApi, TransactionsApi};
use partkey_core::{PartkeyError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Header algod expects the API token in
const TOKEN_HEADER: &str = "X-Algo-API-Token";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a single algod node
#[derive(Clone)]
pub struct AlgodClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    token: String,
    base_url: String,
}

impl AlgodClient {
    /// Create a new client for the given node URL and API token using
    /// default settings
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        AlgodClientBuilder::new(base_url, token).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(base_url: impl Into<String>, token: impl Into<String>) -> AlgodClientBuilder {
        AlgodClientBuilder::new(base_url, token)
    }

    /// Access participation key endpoints
    #[must_use]
    pub fn participation(&self) -> ParticipationApi<'_> {
        ParticipationApi::new(self)
    }

    /// Access transaction endpoints
    #[must_use]
    pub fn transactions(&self) -> TransactionsApi<'_> {
        TransactionsApi::new(self)
    }

    /// Access node status endpoints
    #[must_use]
    pub fn node(&self) -> NodeApi<'_> {
        NodeApi::new(self)
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = build_url(&self.inner.base_url, path, params);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .header(TOKEN_HEADER, &self.inner.token)
            .send()
            .await
            .map_err(|e| PartkeyError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a POST request with no body, returning no body
    pub(crate) async fn post_empty(&self, path: &str, params: &[(&str, &str)]) -> Result<()> {
        let url = build_url(&self.inner.base_url, path, params);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .header(TOKEN_HEADER, &self.inner.token)
            .send()
            .await
            .map_err(|e| PartkeyError::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    /// Perform a POST request with a raw binary body
    pub(crate) async fn post_raw<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Vec<u8>,
    ) -> Result<T> {
        let url = build_url(&self.inner.base_url, path, &[]);
        debug!(url = %url, bytes = body.len(), "POST raw request");

        let response = self
            .inner
            .http
            .post(&url)
            .header(TOKEN_HEADER, &self.inner.token)
            .header(reqwest::header::CONTENT_TYPE, "application/x-binary")
            .body(body)
            .send()
            .await
            .map_err(|e| PartkeyError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a DELETE request
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = build_url(&self.inner.base_url, path, &[]);
        debug!(url = %url, "DELETE request");

        let response = self
            .inner
            .http
            .delete(&url)
            .header(TOKEN_HEADER, &self.inner.token)
            .send()
            .await
            .map_err(|e| PartkeyError::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| PartkeyError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(PartkeyError::Json)
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Handle an API response whose body we don't care about
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a PartkeyError
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // algod error bodies are {"message": "..."}
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            401 => Err(PartkeyError::Unauthorized),
            404 => Err(PartkeyError::NotFound { resource: message }),
            _ => {
                warn!(status, message = %message, "algod returned an error");
                Err(PartkeyError::Api {
                    code: status,
                    message,
                })
            }
        }
    }
}

/// Builder for configuring an [`AlgodClient`]
pub struct AlgodClientBuilder {
    base_url: String,
    token: String,
    timeout: Duration,
    user_agent: String,
}

impl AlgodClientBuilder {
    /// Create a new builder for the given node URL and API token
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("partkey/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> AlgodClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        AlgodClient {
            inner: Arc::new(ClientInner {
                http,
                token: self.token,
                base_url: self.base_url.trim_end_matches('/').to_string(),
            }),
        }
    }
}

fn build_url(base: &str, path: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{base}{path}");

    let mut sep = '?';
    for (key, value) in params {
        url.push(sep);
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
        sep = '&';
    }

    url
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
