//! Typed records for Semantic Scholar API entities.
//!
//! Every field the API may omit is an `Option`, so "unknown" is never
//! confused with a zero or empty default. Unknown keys are ignored.

mod author;
mod page;
mod paper;

use std::fmt;

use serde::de::DeserializeOwned;

pub use author::{Author, DetailedAuthor};
pub use page::PageState;
pub use paper::{Citation, DetailedPaper, ExternalIds, Paper, PaperRef, Reference};

/// The record shape a payload is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// [`Author`]
    Author,
    /// [`DetailedAuthor`]
    DetailedAuthor,
    /// [`Paper`]
    Paper,
    /// [`DetailedPaper`]
    DetailedPaper,
    /// [`Citation`] or [`Reference`]
    PaperRef,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Author => "Author",
            Self::DetailedAuthor => "DetailedAuthor",
            Self::Paper => "Paper",
            Self::DetailedPaper => "DetailedPaper",
            Self::PaperRef => "PaperRef",
        };
        f.write_str(name)
    }
}

/// A record type that can be decoded from an API payload.
pub trait Record: DeserializeOwned {
    /// Kind tag used in decode errors.
    const KIND: RecordKind;
}

impl Record for Author {
    const KIND: RecordKind = RecordKind::Author;
}

impl Record for DetailedAuthor {
    const KIND: RecordKind = RecordKind::DetailedAuthor;
}

impl Record for Paper {
    const KIND: RecordKind = RecordKind::Paper;
}

impl Record for DetailedPaper {
    const KIND: RecordKind = RecordKind::DetailedPaper;
}

impl Record for PaperRef {
    const KIND: RecordKind = RecordKind::PaperRef;
}
