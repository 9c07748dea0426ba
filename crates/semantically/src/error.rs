//! Error types for the Semantically client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use crate::models::RecordKind;

/// A payload that could not be typed as the requested record kind.
#[derive(thiserror::Error, Debug)]
#[error("Cannot decode {kind}{}: {source}", .key.as_ref().map(|k| format!(" for '{k}'")).unwrap_or_default())]
pub struct DecodeError {
    /// Record kind that was requested.
    pub kind: RecordKind,

    /// Batch key whose payload failed, if any.
    pub key: Option<String>,

    /// Underlying serde error.
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    /// Create a decode error for a single payload.
    #[must_use]
    pub fn new(kind: RecordKind, source: serde_json::Error) -> Self {
        Self { kind, key: None, source }
    }

    /// Attach the batch key that produced the payload.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Errors from the client, batch engine and facade.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Query parameters rejected by the API (400 response)
    #[error("Malformed query '{query}': {message}")]
    MalformedQuery {
        /// Query string or id that was sent
        query: String,
        /// Error message from API
        message: String,
    },

    /// Paper id rejected locally or unknown to the API (404 response)
    #[error("Unknown paper identifier '{id}': {message}")]
    UnknownPaperIdentifier {
        /// The offending id
        id: String,
        /// Reason
        message: String,
    },

    /// Author id unknown to the API (404 response)
    #[error("Unknown author identifier '{id}': {message}")]
    UnknownAuthorIdentifier {
        /// The offending id
        id: String,
        /// Reason
        message: String,
    },

    /// Lookup yielded nothing under the strict result policy
    #[error("No result for '{request}': {message}")]
    EmptyResult {
        /// Query, title or id that was looked up
        request: String,
        /// Reason
        message: String,
    },

    /// Payload shape unusable for the target record
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Response body is not JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// One request of a batch failed, aborting the batch
    #[error("Batch request for '{key}' failed: {source}")]
    Batch {
        /// Input key of the failed request
        key: String,
        /// What went wrong
        #[source]
        source: Box<ClientError>,
    },

    /// The blocking runtime could not be started
    #[error("Failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ClientError {
    /// Create a malformed query error.
    #[must_use]
    pub fn malformed_query(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedQuery { query: query.into(), message: message.into() }
    }

    /// Create an unknown paper identifier error.
    #[must_use]
    pub fn unknown_paper(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnknownPaperIdentifier { id: id.into(), message: message.into() }
    }

    /// Create an unknown author identifier error.
    #[must_use]
    pub fn unknown_author(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnknownAuthorIdentifier { id: id.into(), message: message.into() }
    }

    /// Create an empty result error.
    #[must_use]
    pub fn empty_result(request: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EmptyResult { request: request.into(), message: message.into() }
    }

    /// Wrap an error with the batch key that caused it.
    #[must_use]
    pub fn batch(key: impl Into<String>, source: Self) -> Self {
        Self::Batch { key: key.into(), source: Box::new(source) }
    }

    /// Input key or id this error names, if any.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::MalformedQuery { query, .. } => Some(query.as_str()),
            Self::UnknownPaperIdentifier { id, .. } | Self::UnknownAuthorIdentifier { id, .. } => {
                Some(id.as_str())
            }
            Self::EmptyResult { request, .. } => Some(request.as_str()),
            Self::Decode(e) => e.key.as_deref(),
            Self::Batch { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }

    /// Returns true if this is a no-result condition.
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }

    /// Returns true if the API rejected the input itself (400 or 404).
    #[must_use]
    pub const fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedQuery { .. }
                | Self::UnknownPaperIdentifier { .. }
                | Self::UnknownAuthorIdentifier { .. }
        )
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
