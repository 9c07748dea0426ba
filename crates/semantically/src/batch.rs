//! Concurrent batch lookups.
//!
//! One URL is built per key, all requests are dispatched at once on the shared
//! client and awaited together. Responses are paired with keys by position,
//! never by arrival order or response content.

use std::collections::HashMap;

use futures::future::{join_all, try_join_all};
use serde_json::Value;

use crate::client::{RawResponse, SemanticScholarClient};
use crate::error::{ClientError, ClientResult};
use crate::urls::{ResourceKind, build_id_urls, build_search_urls};

/// Raw payloads per input key.
pub type RawBatch = HashMap<String, Vec<Value>>;

/// How a response body is turned into a list of payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// Search endpoints: payloads live under `data`; no `data` means no results.
    Search,
    /// Identifier endpoints: `data` is unwrapped when present, otherwise the
    /// body itself is the payload.
    Lookup,
}

/// Fan-out/fan-in engine over a shared client.
#[derive(Debug, Clone)]
pub struct BatchFetcher {
    client: SemanticScholarClient,
}

impl BatchFetcher {
    /// Create an engine sharing the client's connection pool.
    #[must_use]
    pub fn new(client: SemanticScholarClient) -> Self {
        Self { client }
    }

    /// Run one search per query.
    ///
    /// # Errors
    ///
    /// Returns the first failing request as [`ClientError::Batch`].
    pub async fn search(
        &self,
        resource: ResourceKind,
        queries: &[String],
        params: &[(String, String)],
    ) -> ClientResult<RawBatch> {
        let urls = build_search_urls(self.client.api_url(), resource, queries, params);
        self.fetch_many(resource, queries, &urls, Envelope::Search).await
    }

    /// Look up every id, optionally under a sub-resource (`papers`, `citations`, ...).
    ///
    /// # Errors
    ///
    /// Returns the first failing request as [`ClientError::Batch`].
    pub async fn lookup(
        &self,
        resource: ResourceKind,
        ids: &[String],
        params: &[(String, String)],
        suffix: &str,
    ) -> ClientResult<RawBatch> {
        let urls = build_id_urls(self.client.api_url(), resource, ids, params, suffix);
        self.fetch_many(resource, ids, &urls, Envelope::Lookup).await
    }

    /// Like [`search`](Self::search), but every query gets its own outcome.
    pub async fn search_settled(
        &self,
        resource: ResourceKind,
        queries: &[String],
        params: &[(String, String)],
    ) -> Vec<(String, ClientResult<Vec<Value>>)> {
        let urls = build_search_urls(self.client.api_url(), resource, queries, params);
        self.fetch_settled(resource, queries, &urls, Envelope::Search).await
    }

    /// Like [`lookup`](Self::lookup), but every id gets its own outcome.
    pub async fn lookup_settled(
        &self,
        resource: ResourceKind,
        ids: &[String],
        params: &[(String, String)],
        suffix: &str,
    ) -> Vec<(String, ClientResult<Vec<Value>>)> {
        let urls = build_id_urls(self.client.api_url(), resource, ids, params, suffix);
        self.fetch_settled(resource, ids, &urls, Envelope::Lookup).await
    }

    /// Fetch `urls[i]` for `keys[i]` concurrently, failing fast.
    ///
    /// Duplicate keys collapse to the last one.
    ///
    /// # Errors
    ///
    /// Returns the first failing request as [`ClientError::Batch`].
    pub async fn fetch_many(
        &self,
        resource: ResourceKind,
        keys: &[String],
        urls: &[String],
        envelope: Envelope,
    ) -> ClientResult<RawBatch> {
        debug_assert_eq!(keys.len(), urls.len());
        tracing::debug!(resource = %resource, count = keys.len(), "Dispatching batch");

        let requests = keys.iter().zip(urls).map(|(key, url)| async move {
            self.fetch_one(resource, key, url, envelope)
                .await
                .map_err(|e| ClientError::batch(key.clone(), e))
        });

        let results = try_join_all(requests).await.inspect_err(|e| {
            tracing::warn!(resource = %resource, error = %e, "Batch aborted");
        })?;

        Ok(keys.iter().cloned().zip(results).collect())
    }

    async fn fetch_settled(
        &self,
        resource: ResourceKind,
        keys: &[String],
        urls: &[String],
        envelope: Envelope,
    ) -> Vec<(String, ClientResult<Vec<Value>>)> {
        tracing::debug!(resource = %resource, count = keys.len(), "Dispatching settled batch");

        let requests =
            keys.iter().zip(urls).map(|(key, url)| self.fetch_one(resource, key, url, envelope));
        let results = join_all(requests).await;

        keys.iter().cloned().zip(results).collect()
    }

    async fn fetch_one(
        &self,
        resource: ResourceKind,
        key: &str,
        url: &str,
        envelope: Envelope,
    ) -> ClientResult<Vec<Value>> {
        let raw = self.client.get_url(url).await?;
        let body = check_response(resource, key, raw)?;
        Ok(unwrap_payloads(body, envelope))
    }
}

/// Map an API response onto the error taxonomy and parse its body.
///
/// An empty 2xx body parses as `null`.
pub(crate) fn check_response(
    resource: ResourceKind,
    input: &str,
    raw: RawResponse,
) -> ClientResult<Value> {
    let RawResponse { status, body } = raw;
    match status {
        400 => Err(ClientError::malformed_query(input, body)),
        404 => Err(match resource {
            ResourceKind::Paper => ClientError::unknown_paper(input, body),
            ResourceKind::Author => ClientError::unknown_author(input, body),
        }),
        200..=299 if body.trim().is_empty() => Ok(Value::Null),
        200..=299 => Ok(serde_json::from_str(&body)?),
        _ => Err(ClientError::UnexpectedStatus { status, message: body }),
    }
}

/// Collapse settled outcomes into a batch, dropping keys the API rejected.
///
/// Keys answered with 400 or 404 are logged and left out. Duplicate keys
/// collapse to the last one.
///
/// # Errors
///
/// Returns any other failure as [`ClientError::Batch`].
pub fn settle(outcomes: Vec<(String, ClientResult<Vec<Value>>)>) -> ClientResult<RawBatch> {
    let mut batch = RawBatch::with_capacity(outcomes.len());
    for (key, outcome) in outcomes {
        match outcome {
            Ok(payloads) => {
                batch.insert(key, payloads);
            }
            Err(e) if e.is_rejected_input() => {
                tracing::warn!(key = %key, error = %e, "Dropping rejected batch entry");
            }
            Err(e) => return Err(ClientError::batch(key, e)),
        }
    }
    Ok(batch)
}

/// Turn a response body into the list of payloads it carries.
#[must_use]
pub fn unwrap_payloads(body: Value, envelope: Envelope) -> Vec<Value> {
    let inner = match (body, envelope) {
        (Value::Object(mut map), _) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        (Value::Object(_), Envelope::Search) => Value::Null,
        (other, _) => other,
    };

    match inner {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        single => vec![single],
    }
}
