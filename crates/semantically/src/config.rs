//! Configuration for the Semantically client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Public Semantic Scholar host (used without an API key).
    pub const PUBLIC_HOST: &str = "https://api.semanticscholar.org/";

    /// Partner host with elevated quota (used when an API key is configured).
    pub const PARTNER_HOST: &str = "https://partner.semanticscholar.org/";

    /// Path prefix of the Graph API, relative to the host.
    pub const API_PREFIX: &str = "graph/v1/";

    /// Header carrying the API key.
    pub const API_KEY_HEADER: &str = "x-api-key";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Default search offset.
    pub const DEFAULT_OFFSET: u32 = 0;

    /// Default search page size.
    pub const DEFAULT_LIMIT: u32 = 100;

    /// Minimum similarity ratio for a title match (exclusive).
    pub const TITLE_SIMILARITY_THRESHOLD: f64 = 0.9;
}

/// Field sets for API requests.
pub mod fields {
    /// Default fields for keyword and id lookups.
    pub const DEFAULT_PAPER: &[&str] = &["paperId", "title"];

    /// Every flat paper field.
    pub const ALL_PAPER: &[&str] = &[
        "paperId",
        "externalIds",
        "url",
        "title",
        "abstract",
        "venue",
        "year",
        "referenceCount",
        "citationCount",
        "isOpenAccess",
        "fieldsOfStudy",
        "authors",
    ];

    /// Default fields for minimal author lookups.
    pub const DEFAULT_AUTHOR: &[&str] = &["authorId", "name"];

    /// Every detailed author field.
    pub const ALL_DETAILED_AUTHOR: &[&str] = &[
        "authorId",
        "externalIds",
        "url",
        "name",
        "aliases",
        "affiliations",
        "homepage",
        "paperCount",
        "citationCount",
        "hIndex",
        "papers",
    ];
}

/// Identifier types understood by the paper endpoints, in match order.
pub const VALID_ID_PREFIXES: &[&str] =
    &["CorpusId", "DOI", "ARXIV", "MAG", "ACL", "PMID", "PMCID", "URL"];

/// Hosts accepted for `URL:` paper identifiers.
pub const VALID_URL_HOSTS: &[&str] =
    &["semanticscholar.org", "arxiv.org", "aclweb.org", "acm.org", "biorxiv.org"];

/// How lookups react to empty results and undecodable batch entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultPolicy {
    /// Raise `EmptyResult` and propagate decode failures.
    #[default]
    Strict,
    /// Return `None` for empty lookups and drop undecodable batch keys.
    Lenient,
}

impl ResultPolicy {
    /// Returns true for the raising policy.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Host used without an API key.
    pub public_host: String,

    /// Host used with an API key.
    pub partner_host: String,

    /// Graph API path prefix, joined onto the selected host.
    pub api_prefix: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Default search offset.
    pub default_offset: u32,

    /// Default search page size.
    pub default_limit: u32,

    /// Title similarity threshold (exclusive).
    pub title_similarity_threshold: f64,

    /// Default fields for keyword and id paper lookups.
    pub paper_fields: Vec<String>,

    /// Default fields for title lookups.
    pub title_fields: Vec<String>,

    /// Default fields for author lookups.
    pub author_fields: Vec<String>,

    /// Empty-result and batch decode policy.
    pub result_policy: ResultPolicy,

    /// Identifier prefixes, scanned in order.
    pub valid_id_prefixes: Vec<String>,

    /// Hosts allowed for URL identifiers.
    pub valid_url_hosts: Vec<String>,
}

impl Config {
    /// Create a new configuration with optional API key.
    ///
    /// The partner host is used automatically when a key is present. An
    /// empty key counts as no key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            public_host: api::PUBLIC_HOST.to_string(),
            partner_host: api::PARTNER_HOST.to_string(),
            api_prefix: api::API_PREFIX.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            default_offset: api::DEFAULT_OFFSET,
            default_limit: api::DEFAULT_LIMIT,
            title_similarity_threshold: api::TITLE_SIMILARITY_THRESHOLD,
            paper_fields: owned(fields::DEFAULT_PAPER),
            title_fields: owned(fields::ALL_PAPER),
            author_fields: owned(fields::ALL_DETAILED_AUTHOR),
            result_policy: ResultPolicy::Strict,
            valid_id_prefixes: owned(VALID_ID_PREFIXES),
            valid_url_hosts: owned(VALID_URL_HOSTS),
        }
    }

    /// Create a test configuration pointing both hosts at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        let host = format!("{}/", base_url.trim_end_matches('/'));
        Self {
            public_host: host.clone(),
            partner_host: host,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::new(None)
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok();
        Ok(Self::new(api_key))
    }

    /// Set the result policy.
    #[must_use]
    pub fn with_result_policy(mut self, policy: ResultPolicy) -> Self {
        self.result_policy = policy;
        self
    }

    /// The configured API key, if it is non-empty.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// Host selected by credential presence.
    #[must_use]
    pub fn host(&self) -> &str {
        if self.has_api_key() { &self.partner_host } else { &self.public_host }
    }

    /// Fully qualified API base, always ending in `/`.
    #[must_use]
    pub fn api_url(&self) -> String {
        let host = self.host().trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() { format!("{host}/") } else { format!("{host}/{prefix}/") }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
