//! Semantically
//!
//! A typed client for the Semantic Scholar Graph API.
//!
//! # Features
//!
//! - **Typed records**: papers, authors, citations and references with optional fields
//! - **Concurrent batches**: many keywords, names or ids fetched at once, keyed by input
//! - **Title matching**: fuzzy title lookup with a similarity threshold
//! - **Paging cursor**: offset, limit, next and total of the last search
//! - **Blocking facade**: a synchronous wrapper for non-async callers
//!
//! # Example
//!
//! ```no_run
//! use semantically::{Config, Semantically};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut s2 = Semantically::new(Config::from_env()?)?;
//!
//!     let paper = s2
//!         .get_paper_by_title("Attention Is All You Need", None)
//!         .await?;
//!     println!("{paper:?} (total hits: {})", s2.page_state().total);
//!
//!     let keywords = vec!["graph embeddings".to_string(), "link prediction".to_string()];
//!     let hits = s2.get_papers_by_keyword(&keywords, None, Some(10), None).await?;
//!     for (keyword, papers) in &hits {
//!         println!("{keyword}: {} papers", papers.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod blocking;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod facade;
pub mod ids;
pub mod models;
pub mod urls;

pub use batch::BatchFetcher;
pub use client::SemanticScholarClient;
pub use config::{Config, ResultPolicy};
pub use error::{ClientError, ClientResult, DecodeError};
pub use facade::Semantically;
pub use ids::IdValidator;
pub use models::{Author, DetailedAuthor, DetailedPaper, PageState, Paper, PaperRef};
pub use urls::ResourceKind;
