//! Synchronous wrapper around [`crate::Semantically`].
//!
//! Each call runs the async lookup to completion on a private current-thread
//! runtime. Batch lookups still fan out concurrently inside that runtime.
//! Do not use from within an async context.

use std::collections::HashMap;

use tokio::runtime::{Builder, Runtime};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::facade;
use crate::models::{DetailedAuthor, DetailedPaper, PageState, Paper};

/// Blocking Semantic Scholar client.
#[derive(Debug)]
pub struct Semantically {
    inner: facade::Semantically,
    runtime: Runtime,
}

impl Semantically {
    /// Create a blocking client.
    ///
    /// # Errors
    ///
    /// Returns error if the runtime or the HTTP client cannot be built.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let runtime =
            Builder::new_current_thread().enable_all().build().map_err(ClientError::Runtime)?;
        let inner = facade::Semantically::new(config)?;
        Ok(Self { inner, runtime })
    }

    /// Paging state of the last successful single search.
    #[must_use]
    pub const fn page_state(&self) -> PageState {
        self.inner.page_state()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        self.inner.config()
    }

    /// See [`facade::Semantically::get_paper_by_title`].
    pub fn get_paper_by_title(
        &mut self,
        title: &str,
        fields: Option<&[&str]>,
    ) -> ClientResult<Option<Paper>> {
        self.runtime.block_on(self.inner.get_paper_by_title(title, fields))
    }

    /// See [`facade::Semantically::get_paper_by_keyword`].
    pub fn get_paper_by_keyword(
        &mut self,
        keyword: &str,
        offset: Option<u32>,
        limit: Option<u32>,
        fields: Option<&[&str]>,
    ) -> ClientResult<Option<Vec<Paper>>> {
        self.runtime.block_on(self.inner.get_paper_by_keyword(keyword, offset, limit, fields))
    }

    /// See [`facade::Semantically::get_papers_by_keyword`].
    pub fn get_papers_by_keyword(
        &self,
        keywords: &[String],
        offset: Option<u32>,
        limit: Option<u32>,
        fields: Option<&[&str]>,
    ) -> ClientResult<HashMap<String, Vec<Paper>>> {
        self.runtime.block_on(self.inner.get_papers_by_keyword(keywords, offset, limit, fields))
    }

    /// See [`facade::Semantically::get_paper_by_id`].
    pub fn get_paper_by_id(
        &self,
        paper_id: &str,
        fields: Option<&[&str]>,
    ) -> ClientResult<DetailedPaper> {
        self.runtime.block_on(self.inner.get_paper_by_id(paper_id, fields))
    }

    /// See [`facade::Semantically::get_papers_by_id`].
    pub fn get_papers_by_id(
        &self,
        paper_ids: &[String],
        fields: Option<&[&str]>,
    ) -> ClientResult<HashMap<String, Vec<DetailedPaper>>> {
        self.runtime.block_on(self.inner.get_papers_by_id(paper_ids, fields))
    }

    /// See [`facade::Semantically::get_author_by_name`].
    pub fn get_author_by_name(
        &mut self,
        name: &str,
        offset: Option<u32>,
        limit: Option<u32>,
        fields: Option<&[&str]>,
    ) -> ClientResult<Option<Vec<DetailedAuthor>>> {
        self.runtime.block_on(self.inner.get_author_by_name(name, offset, limit, fields))
    }

    /// See [`facade::Semantically::get_authors_by_name`].
    pub fn get_authors_by_name(
        &self,
        names: &[String],
        offset: Option<u32>,
        limit: Option<u32>,
        fields: Option<&[&str]>,
    ) -> ClientResult<HashMap<String, Vec<DetailedAuthor>>> {
        self.runtime.block_on(self.inner.get_authors_by_name(names, offset, limit, fields))
    }

    /// See [`facade::Semantically::get_author_by_id`].
    pub fn get_author_by_id(
        &self,
        author_id: &str,
        fields: Option<&[&str]>,
    ) -> ClientResult<DetailedAuthor> {
        self.runtime.block_on(self.inner.get_author_by_id(author_id, fields))
    }

    /// See [`facade::Semantically::get_authors_by_id`].
    pub fn get_authors_by_id(
        &self,
        author_ids: &[String],
        fields: Option<&[&str]>,
    ) -> ClientResult<HashMap<String, Vec<DetailedAuthor>>> {
        self.runtime.block_on(self.inner.get_authors_by_id(author_ids, fields))
    }
}
