//! Author data models matching the Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

use super::{ExternalIds, Paper};

/// Minimal author reference (used in paper author lists).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Author {
    /// Get the author name or "Unknown".
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// A research author with profile and paper list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAuthor {
    /// Semantic Scholar author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// External IDs (ORCID, DBLP, etc.).
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// Semantic Scholar profile URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Other names the author has published under.
    #[serde(default)]
    pub aliases: Option<Vec<String>>,

    /// Institutional affiliations.
    #[serde(default)]
    pub affiliations: Option<Vec<String>>,

    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Total number of papers by this author.
    #[serde(default)]
    pub paper_count: Option<i32>,

    /// Total citation count across all papers.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// h-index metric.
    #[serde(default)]
    pub h_index: Option<i32>,

    /// Papers written by this author.
    #[serde(default)]
    pub papers: Option<Vec<Paper>>,
}

impl DetailedAuthor {
    /// Get the author name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Get the primary affiliation if available.
    #[must_use]
    pub fn primary_affiliation(&self) -> Option<&str> {
        self.affiliations.as_ref()?.first().map(String::as_str)
    }

    /// Get the ORCID if available.
    #[must_use]
    pub fn orcid(&self) -> Option<&str> {
        self.external_ids.as_ref()?.get("ORCID")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detailed_author_deserialize() {
        let json = r#"{
            "authorId": "123",
            "name": "Jane Smith",
            "aliases": ["J. Smith"],
            "affiliations": ["MIT", "Stanford"],
            "paperCount": 50,
            "citationCount": 1000,
            "hIndex": 15,
            "externalIds": {"ORCID": "0000-0001", "DBLP": ["Jane Smith"]},
            "papers": [{"paperId": "p1", "title": "First"}]
        }"#;

        let author: DetailedAuthor = serde_json::from_str(json).unwrap();
        assert_eq!(author.author_id.as_deref(), Some("123"));
        assert_eq!(author.name_or_default(), "Jane Smith");
        assert_eq!(author.primary_affiliation(), Some("MIT"));
        assert_eq!(author.orcid(), Some("0000-0001"));
        assert_eq!(author.h_index, Some(15));
        assert_eq!(author.papers.unwrap()[0].title.as_deref(), Some("First"));
    }

    #[test]
    fn test_author_minimal() {
        let author: Author = serde_json::from_str(r#"{"name": "John"}"#).unwrap();
        assert!(author.author_id.is_none());
        assert_eq!(author.name_or_default(), "John");
    }

    #[test]
    fn test_detailed_author_missing_counts_are_none() {
        let author: DetailedAuthor = serde_json::from_str(r#"{"authorId": "456"}"#).unwrap();
        assert_eq!(author.name_or_default(), "Unknown");
        assert!(author.h_index.is_none());
        assert!(author.paper_count.is_none());
        assert!(author.primary_affiliation().is_none());
    }
}
