//! Integration tests against the live Semantic Scholar API.
//!
//! These tests hit the real Semantic Scholar API.
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use semantically::config::Config;
use semantically::{ClientError, Semantically};

/// Well-known paper IDs for testing.
mod paper_ids {
    /// "Attention Is All You Need" - Vaswani et al. 2017
    pub const ATTENTION: &str = "649def34f8be52c8b66281af98ae884c09aef38b";
    /// "BERT" - Devlin et al. 2019
    pub const BERT: &str = "df2b0e26d0599ce3e70df8a9da02e51594e0e992";
    /// Well-formed but unknown id
    pub const UNKNOWN: &str = "0000000000000000000000000000000000000000";
}

/// Geoffrey Hinton
const HINTON: &str = "1741101";

fn create_client() -> Semantically {
    Semantically::new(Config::from_env().expect("config")).expect("Failed to create client")
}

/// Rate limiting without an API key is expected; anything else is a failure.
fn tolerate_rate_limit(err: &ClientError) {
    match err {
        ClientError::UnexpectedStatus { status: 429, .. } => {
            println!("Note: rate limited: {err}");
        }
        ClientError::Batch { source, .. } => tolerate_rate_limit(source),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_title_lookup() {
    let mut s2 = create_client();
    match s2.get_paper_by_title("Attention Is All You Need", None).await {
        Ok(paper) => {
            let paper = paper.expect("title should match");
            assert_eq!(paper.paper_id.as_deref(), Some(paper_ids::ATTENTION));
            assert!(s2.page_state().total > 0);
        }
        Err(e) => tolerate_rate_limit(&e),
    }
}

#[tokio::test]
async fn test_keyword_search_pages() {
    let mut s2 = create_client();
    match s2.get_paper_by_keyword("knowledge graph embedding", Some(0), Some(5), None).await {
        Ok(papers) => {
            let papers = papers.expect("results");
            assert!(papers.len() <= 5);
            let page = s2.page_state();
            assert!(page.has_more());
            assert_eq!(page.next, 5);
        }
        Err(e) => tolerate_rate_limit(&e),
    }
}

#[tokio::test]
async fn test_paper_batch() {
    let s2 = create_client();
    let ids = vec![paper_ids::ATTENTION.to_string(), paper_ids::BERT.to_string()];
    match s2.get_papers_by_id(&ids, Some(&["paperId", "title", "year"])).await {
        Ok(papers) => {
            assert_eq!(papers.len(), 2);
            assert_eq!(papers[paper_ids::ATTENTION][0].year, Some(2017));
        }
        Err(e) => tolerate_rate_limit(&e),
    }
}

#[tokio::test]
async fn test_unknown_paper() {
    let s2 = create_client();
    match s2.get_paper_by_id(paper_ids::UNKNOWN, None).await {
        Err(ClientError::UnknownPaperIdentifier { id, .. }) => assert_eq!(id, paper_ids::UNKNOWN),
        Err(e) => tolerate_rate_limit(&e),
        Ok(paper) => panic!("unexpected paper: {paper:?}"),
    }
}

#[tokio::test]
async fn test_author_by_id() {
    let s2 = create_client();
    match s2.get_author_by_id(HINTON, Some(&["authorId", "name", "hIndex"])).await {
        Ok(author) => {
            assert_eq!(author.author_id.as_deref(), Some(HINTON));
            assert!(author.h_index.unwrap_or_default() > 100);
        }
        Err(e) => tolerate_rate_limit(&e),
    }
}
