//! Paper data models matching the Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

use super::{Author, DetailedAuthor};

/// External identifiers keyed by source (`DOI`, `ArXiv`, `CorpusId`, ...).
///
/// Kept opaque: the API adds sources over time and mixes string and integer values.
pub type ExternalIds = serde_json::Map<String, serde_json::Value>;

/// A research paper from Semantic Scholar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Semantic Scholar paper ID (the API occasionally omits it).
    #[serde(default)]
    pub paper_id: Option<String>,

    /// External identifiers (DOI, ArXiv, PubMed, etc.).
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// Semantic Scholar URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Number of references in this paper.
    #[serde(default)]
    pub reference_count: Option<i32>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// Influential citation count.
    #[serde(default)]
    pub influential_citation_count: Option<i32>,

    /// Whether this paper is open access.
    #[serde(default)]
    pub is_open_access: Option<bool>,

    /// Fields of study (e.g., "Computer Science", "Medicine").
    #[serde(default)]
    pub fields_of_study: Option<Vec<String>>,

    /// List of authors.
    #[serde(default)]
    pub authors: Option<Vec<Author>>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref()?.get("DOI")?.as_str()
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        author_names(self.authors.iter().flatten().filter_map(|a| a.name.as_deref()))
    }
}

/// A paper with detailed authors, citations and references.
///
/// Returned by identifier lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedPaper {
    /// Semantic Scholar paper ID.
    #[serde(default)]
    pub paper_id: Option<String>,

    /// External identifiers.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// Semantic Scholar URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication venue.
    #[serde(default)]
    pub venue: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Number of references.
    #[serde(default)]
    pub reference_count: Option<i32>,

    /// Number of citations.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// Influential citation count.
    #[serde(default)]
    pub influential_citation_count: Option<i32>,

    /// Whether this paper is open access.
    #[serde(default)]
    pub is_open_access: Option<bool>,

    /// Fields of study.
    #[serde(default)]
    pub fields_of_study: Option<Vec<String>>,

    /// Authors with profile details.
    #[serde(default)]
    pub authors: Option<Vec<DetailedAuthor>>,

    /// Papers citing this one.
    #[serde(default)]
    pub citations: Option<Vec<Citation>>,

    /// Papers this one cites.
    #[serde(default)]
    pub references: Option<Vec<Reference>>,
}

impl DetailedPaper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref()?.get("DOI")?.as_str()
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        author_names(self.authors.iter().flatten().filter_map(|a| a.name.as_deref()))
    }
}

/// Minimal paper reference used in citation and reference lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRef {
    /// Paper ID.
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Semantic Scholar URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication venue.
    #[serde(default)]
    pub venue: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// List of authors.
    #[serde(default)]
    pub authors: Option<Vec<Author>>,
}

/// A paper citing the paper it is attached to.
pub type Citation = PaperRef;

/// A paper cited by the paper it is attached to.
pub type Reference = PaperRef;

fn author_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_deserialize_minimal() {
        let json = r#"{"paperId": "abc123"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.paper_id.as_deref(), Some("abc123"));
        assert!(paper.title.is_none());
        assert!(paper.authors.is_none());
        assert!(paper.year.is_none());
    }

    #[test]
    fn test_paper_deserialize_full() {
        let json = r#"{
            "paperId": "abc123",
            "title": "Test Paper",
            "abstract": "This is a test.",
            "year": 2024,
            "citationCount": 42,
            "isOpenAccess": true,
            "authors": [{"authorId": "auth1", "name": "John Doe"}, {"authorId": "auth2", "name": "Jane Roe"}],
            "externalIds": {"DOI": "10.1234/test", "CorpusId": 12345}
        }"#;

        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.title_or_default(), "Test Paper");
        assert_eq!(paper.year, Some(2024));
        assert_eq!(paper.citation_count, Some(42));
        assert_eq!(paper.is_open_access, Some(true));
        assert_eq!(paper.doi(), Some("10.1234/test"));
        assert_eq!(paper.author_names(), "John Doe, Jane Roe");
    }

    #[test]
    fn test_paper_null_id_is_tolerated() {
        let paper: Paper = serde_json::from_str(r#"{"paperId": null, "title": "T"}"#).unwrap();
        assert!(paper.paper_id.is_none());
        assert_eq!(paper.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_empty_author_list_stays_empty() {
        let paper: Paper = serde_json::from_str(r#"{"paperId": "x", "authors": []}"#).unwrap();
        assert_eq!(paper.authors, Some(vec![]));
    }

    #[test]
    fn test_detailed_paper_nested_lists() {
        let json = r#"{
            "paperId": "p1",
            "authors": [{"authorId": "a1", "name": "Ada", "hIndex": 12}],
            "citations": [{"paperId": "c1", "title": "Citing"}],
            "references": [{"paperId": "r1", "year": 1999}, {"title": "No id"}]
        }"#;

        let paper: DetailedPaper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.author_names(), "Ada");
        assert_eq!(paper.authors.as_ref().unwrap()[0].h_index, Some(12));
        assert_eq!(paper.citations.as_ref().unwrap()[0].title.as_deref(), Some("Citing"));
        let refs = paper.references.unwrap();
        assert_eq!(refs[0].year, Some(1999));
        assert!(refs[1].paper_id.is_none());
    }

    #[test]
    fn test_serializes_back_to_camel_case() {
        let paper = Paper {
            paper_id: Some("p".into()),
            citation_count: Some(3),
            ..Default::default()
        };
        let value = serde_json::to_value(&paper).unwrap();
        assert_eq!(value["paperId"], "p");
        assert_eq!(value["citationCount"], 3);
    }
}
