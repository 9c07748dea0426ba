//! Request URL construction.
//!
//! Both builders return one URL per input, in input order. The batch engine
//! relies on that order to pair responses with their keys.

use std::fmt;

use url::form_urlencoded;

/// API resource selecting the sub-path and record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `paper/...` endpoints.
    Paper,
    /// `author/...` endpoints.
    Author,
}

impl ResourceKind {
    /// Path segment for this resource.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paper => "paper",
            Self::Author => "author",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form-encode parameters (`a=b&c=d`, spaces as `+`).
#[must_use]
pub fn encode_params(params: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new()).extend_pairs(params).finish()
}

/// Build `{base}{resource}/search?{params}` for every query.
///
/// The `query` parameter is replaced (or appended) per query.
#[must_use]
pub fn build_search_urls(
    base: &str,
    resource: ResourceKind,
    queries: &[String],
    params: &[(String, String)],
) -> Vec<String> {
    queries
        .iter()
        .map(|query| {
            let mut params = params.to_vec();
            match params.iter_mut().find(|(k, _)| k == "query") {
                Some((_, value)) => value.clone_from(query),
                None => params.push(("query".to_string(), query.clone())),
            }
            format!("{base}{resource}/search?{}", encode_params(&params))
        })
        .collect()
}

/// Build `{base}{resource}/{id}[/{suffix}]?{params}` for every id.
#[must_use]
pub fn build_id_urls(
    base: &str,
    resource: ResourceKind,
    ids: &[String],
    params: &[(String, String)],
    suffix: &str,
) -> Vec<String> {
    let query_string = encode_params(params);
    let suffix = if suffix.is_empty() { String::new() } else { format!("/{suffix}") };

    ids.iter().map(|id| format!("{base}{resource}/{id}{suffix}?{query_string}")).collect()
}
