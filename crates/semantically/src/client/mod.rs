//! Semantic Scholar HTTP transport.
//!
//! Provides the raw GET path shared by single lookups and the batch engine:
//! - Connection pooling via reqwest
//! - API key header and partner host when a key is configured
//! - No retry; callers interpret the status code

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::{Config, api};
use crate::error::ClientResult;
use crate::urls::encode_params;

/// Status code and body of one API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// Pooled HTTP client.
    client: Client,

    /// Fully qualified API base ending in `/`.
    api_url: String,

    /// Whether an API key header is attached.
    has_api_key: bool,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(key) = config.api_key() {
            let mut value = HeaderValue::from_str(key)?;
            value.set_sensitive(true);
            headers.insert(api::API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self { client, api_url: config.api_url(), has_api_key: config.has_api_key() })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    /// Fully qualified API base (host plus prefix).
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// GET `{api_url}{path}` with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns error only on transport failure; any status is returned as-is.
    pub async fn get(&self, path: &str, params: &[(String, String)]) -> ClientResult<RawResponse> {
        let path = path.trim_start_matches('/');
        let url = if params.is_empty() {
            format!("{}{path}", self.api_url)
        } else {
            format!("{}{path}?{}", self.api_url, encode_params(params))
        };
        self.get_url(&url).await
    }

    /// GET a fully built URL.
    ///
    /// # Errors
    ///
    /// Returns error only on transport failure; any status is returned as-is.
    pub async fn get_url(&self, url: &str) -> ClientResult<RawResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(url = %url, status, bytes = body.len(), "Semantic Scholar response");

        Ok(RawResponse { status, body })
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient")
            .field("api_url", &self.api_url)
            .field("has_api_key", &self.has_api_key)
            .finish()
    }
}
