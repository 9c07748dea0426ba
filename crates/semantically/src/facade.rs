//! High-level lookups: by title, keyword, name and identifier.
//!
//! This is where API statuses become [`ClientError`] values and where the
//! configured [`ResultPolicy`] decides between `EmptyResult` and `None`.

use std::collections::HashMap;

use rapidfuzz::distance::indel;
use serde_json::Value;

use crate::batch::{BatchFetcher, Envelope, check_response, settle, unwrap_payloads};
use crate::client::SemanticScholarClient;
use crate::config::{Config, ResultPolicy};
use crate::decode::{decode_batch, decode_list, decode_one};
use crate::error::{ClientError, ClientResult};
use crate::ids::IdValidator;
use crate::models::{DetailedAuthor, DetailedPaper, PageState, Paper, Record};
use crate::urls::ResourceKind;

const NO_RESULTS: &str = "Semantic Scholar returned no results for the query.";
const NO_TITLE_MATCH: &str = "Semantic Scholar results did not match paper title.";

/// Typed Semantic Scholar lookups with a pagination cursor.
#[derive(Debug, Clone)]
pub struct Semantically {
    client: SemanticScholarClient,
    batch: BatchFetcher,
    validator: IdValidator,
    config: Config,
    page: PageState,
}

impl Semantically {
    /// Create a facade from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = SemanticScholarClient::new(&config)?;
        Ok(Self {
            batch: BatchFetcher::new(client.clone()),
            validator: IdValidator::from_config(&config),
            client,
            config,
            page: PageState::default(),
        })
    }

    /// Paging state of the last successful single search.
    #[must_use]
    pub const fn page_state(&self) -> PageState {
        self.page
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying batch engine, for raw keyed lookups.
    #[must_use]
    pub const fn batch(&self) -> &BatchFetcher {
        &self.batch
    }

    /// Find the paper whose title best matches `title`.
    ///
    /// Candidates must be strictly above the similarity threshold; the best one
    /// wins and ties go to the candidate listed first by the API.
    pub async fn get_paper_by_title(
        &mut self,
        title: &str,
        fields: Option<&[&str]>,
    ) -> ClientResult<Option<Paper>> {
        let fields = select_fields(fields, &self.config.title_fields);
        let params = build_params(
            &fields,
            Some(self.config.default_offset),
            Some(self.config.default_limit),
            title,
        );

        let payloads = self.search(ResourceKind::Paper, title, &params).await?;
        if payloads.is_empty() {
            return self.empty(title, NO_RESULTS);
        }

        let candidates: Vec<Paper> = decode_list(&payloads)?;
        match best_title_match(title, candidates, self.config.title_similarity_threshold) {
            Some(paper) => Ok(Some(paper)),
            None => self.empty(title, NO_TITLE_MATCH),
        }
    }

    /// Search papers by keyword.
    pub async fn get_paper_by_keyword(
        &mut self,
        keyword: &str,
        offset: Option<u32>,
        limit: Option<u32>,
        fields: Option<&[&str]>,
    ) -> ClientResult<Option<Vec<Paper>>> {
        let fields = select_fields(fields, &self.config.paper_fields);
        let params = build_params(&fields, Some(self.offset(offset)), Some(self.limit(limit)), keyword);

        let payloads = self.search(ResourceKind::Paper, keyword, &params).await?;
        if payloads.is_empty() {
            return self.empty(keyword, NO_RESULTS);
        }
        Ok(Some(decode_list(&payloads)?))
    }

    /// Search papers for every keyword concurrently.
    pub async fn get_papers_by_keyword(
        &self,
        keywords: &[String],
        offset: Option<u32>,
        limit: Option<u32>,
        fields: Option<&[&str]>,
    ) -> ClientResult<HashMap<String, Vec<Paper>>> {
        let fields = select_fields(fields, &self.config.paper_fields);
        let params = build_params(&fields, Some(self.offset(offset)), Some(self.limit(limit)), "");

        self.search_batch(ResourceKind::Paper, keywords, &params).await
    }

    /// Fetch one paper by identifier.
    ///
    /// The identifier format is checked locally before any request is made.
    pub async fn get_paper_by_id(
        &self,
        paper_id: &str,
        fields: Option<&[&str]>,
    ) -> ClientResult<DetailedPaper> {
        self.validate_paper_id(paper_id)?;
        let fields = select_fields(fields, &self.config.paper_fields);
        self.lookup(ResourceKind::Paper, paper_id, &build_params(&fields, None, None, "")).await
    }

    /// Fetch several papers by identifier concurrently.
    pub async fn get_papers_by_id(
        &self,
        paper_ids: &[String],
        fields: Option<&[&str]>,
    ) -> ClientResult<HashMap<String, Vec<DetailedPaper>>> {
        for id in paper_ids {
            self.validate_paper_id(id)?;
        }
        let fields = select_fields(fields, &self.config.paper_fields);
        let params = build_params(&fields, None, None, "");

        self.lookup_batch(ResourceKind::Paper, paper_ids, &params).await
    }

    /// Search authors by name.
    pub async fn get_author_by_name(
        &mut self,
        name: &str,
        offset: Option<u32>,
        limit: Option<u32>,
        fields: Option<&[&str]>,
    ) -> ClientResult<Option<Vec<DetailedAuthor>>> {
        let fields = select_fields(fields, &self.config.author_fields);
        let params = build_params(&fields, Some(self.offset(offset)), Some(self.limit(limit)), name);

        let payloads = self.search(ResourceKind::Author, name, &params).await?;
        if payloads.is_empty() {
            return self.empty(name, NO_RESULTS);
        }
        Ok(Some(decode_list(&payloads)?))
    }

    /// Search authors for every name concurrently.
    pub async fn get_authors_by_name(
        &self,
        names: &[String],
        offset: Option<u32>,
        limit: Option<u32>,
        fields: Option<&[&str]>,
    ) -> ClientResult<HashMap<String, Vec<DetailedAuthor>>> {
        let fields = select_fields(fields, &self.config.author_fields);
        let params = build_params(&fields, Some(self.offset(offset)), Some(self.limit(limit)), "");

        self.search_batch(ResourceKind::Author, names, &params).await
    }

    /// Fetch one author by Semantic Scholar id.
    pub async fn get_author_by_id(
        &self,
        author_id: &str,
        fields: Option<&[&str]>,
    ) -> ClientResult<DetailedAuthor> {
        let fields = select_fields(fields, &self.config.author_fields);
        self.lookup(ResourceKind::Author, author_id, &build_params(&fields, None, None, "")).await
    }

    /// Fetch several authors by id concurrently.
    pub async fn get_authors_by_id(
        &self,
        author_ids: &[String],
        fields: Option<&[&str]>,
    ) -> ClientResult<HashMap<String, Vec<DetailedAuthor>>> {
        let fields = select_fields(fields, &self.config.author_fields);
        let params = build_params(&fields, None, None, "");

        self.lookup_batch(ResourceKind::Author, author_ids, &params).await
    }

    /// Search every query; lenient mode drops queries the API rejects.
    async fn search_batch<T: Record>(
        &self,
        resource: ResourceKind,
        queries: &[String],
        params: &[(String, String)],
    ) -> ClientResult<HashMap<String, Vec<T>>> {
        let raw = match self.config.result_policy {
            ResultPolicy::Strict => self.batch.search(resource, queries, params).await?,
            ResultPolicy::Lenient => {
                settle(self.batch.search_settled(resource, queries, params).await)?
            }
        };
        Ok(decode_batch(&raw, self.config.result_policy)?)
    }

    /// Look up every id; lenient mode drops ids the API rejects.
    async fn lookup_batch<T: Record>(
        &self,
        resource: ResourceKind,
        ids: &[String],
        params: &[(String, String)],
    ) -> ClientResult<HashMap<String, Vec<T>>> {
        let raw = match self.config.result_policy {
            ResultPolicy::Strict => self.batch.lookup(resource, ids, params, "").await?,
            ResultPolicy::Lenient => {
                settle(self.batch.lookup_settled(resource, ids, params, "").await)?
            }
        };
        Ok(decode_batch(&raw, self.config.result_policy)?)
    }

    /// Run one search and record its paging state.
    async fn search(
        &mut self,
        resource: ResourceKind,
        request: &str,
        params: &[(String, String)],
    ) -> ClientResult<Vec<Value>> {
        let raw = self.client.get(&format!("{resource}/search"), params).await?;
        let body = check_response(resource, request, raw)?;

        self.page = PageState::from_response(&body);
        tracing::debug!(resource = %resource, page = ?self.page, "Search page");

        Ok(unwrap_payloads(body, Envelope::Search))
    }

    async fn lookup<T: Record>(
        &self,
        resource: ResourceKind,
        id: &str,
        params: &[(String, String)],
    ) -> ClientResult<T> {
        let raw = self.client.get(&format!("{resource}/{id}"), params).await?;
        let body = check_response(resource, id, raw)?;
        Ok(decode_one(&body)?)
    }

    fn validate_paper_id(&self, paper_id: &str) -> ClientResult<()> {
        if self.validator.is_valid_paper_id(paper_id) {
            Ok(())
        } else {
            Err(ClientError::unknown_paper(
                paper_id,
                "The provided ID does not match any supported types.",
            ))
        }
    }

    fn empty<T>(&self, request: &str, message: &str) -> ClientResult<Option<T>> {
        match self.config.result_policy {
            ResultPolicy::Strict => Err(ClientError::empty_result(request, message)),
            ResultPolicy::Lenient => Ok(None),
        }
    }

    fn offset(&self, offset: Option<u32>) -> u32 {
        offset.unwrap_or(self.config.default_offset)
    }

    fn limit(&self, limit: Option<u32>) -> u32 {
        limit.unwrap_or(self.config.default_limit)
    }
}

/// Build request parameters in API order: fields, offset, limit, query.
///
/// An empty `query` is left out.
#[must_use]
pub fn build_params(
    fields: &[String],
    offset: Option<u32>,
    limit: Option<u32>,
    query: &str,
) -> Vec<(String, String)> {
    let mut params = vec![("fields".to_string(), fields.join(","))];
    if let Some(offset) = offset {
        params.push(("offset".to_string(), offset.to_string()));
    }
    if let Some(limit) = limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    if !query.is_empty() {
        params.push(("query".to_string(), query.to_string()));
    }
    params
}

fn select_fields(requested: Option<&[&str]>, default: &[String]) -> Vec<String> {
    requested.map_or_else(|| default.to_vec(), |f| f.iter().map(|s| (*s).to_string()).collect())
}

/// Case-insensitive indel similarity in `[0, 1]`.
///
/// Computed as `1 - indel_distance / (len_a + len_b)`, so an inserted or
/// deleted character costs 1 and a substitution costs 2.
#[must_use]
pub fn title_similarity(a: &str, b: &str) -> f64 {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    indel::normalized_similarity(a.chars(), b.chars())
}

/// Pick the candidate most similar to `title`, strictly above `threshold`.
///
/// Ties keep the earliest candidate.
#[must_use]
pub fn best_title_match(title: &str, candidates: Vec<Paper>, threshold: f64) -> Option<Paper> {
    let mut best: Option<(f64, Paper)> = None;

    for paper in candidates {
        let Some(candidate_title) = paper.title.as_deref() else {
            continue;
        };
        let ratio = title_similarity(title, candidate_title);
        if ratio <= threshold {
            continue;
        }
        if best.as_ref().is_none_or(|(best_ratio, _)| ratio > *best_ratio) {
            best = Some((ratio, paper));
        }
    }

    best.map(|(_, paper)| paper)
}
