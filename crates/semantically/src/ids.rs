//! Paper identifier validation.
//!
//! The paper endpoints accept a 40-character content hash or an identifier
//! tagged with a source prefix (`DOI:10.1145/...`, `ARXIV:2106.15928`,
//! `URL:https://arxiv.org/abs/...`). Prefix detection is substring based:
//! an identifier containing a prefix token anywhere is treated as that type.

use url::Url;

use crate::config::Config;

/// Length of a Semantic Scholar content hash.
const SHA_LEN: usize = 40;

const URL_PREFIX: &str = "URL";

/// Checks identifiers against configurable prefix and host lists.
#[derive(Debug, Clone)]
pub struct IdValidator {
    prefixes: Vec<String>,
    url_hosts: Vec<String>,
}

impl IdValidator {
    /// Create a validator from explicit lists.
    #[must_use]
    pub fn new(prefixes: Vec<String>, url_hosts: Vec<String>) -> Self {
        Self { prefixes, url_hosts }
    }

    /// Create a validator from the configured lists.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.valid_id_prefixes.clone(), config.valid_url_hosts.clone())
    }

    /// Returns true if the API would accept `candidate` as a paper id.
    #[must_use]
    pub fn is_valid_paper_id(&self, candidate: &str) -> bool {
        if is_sha(candidate) {
            return true;
        }

        match self.id_type(candidate) {
            None => false,
            Some(URL_PREFIX) => self.is_valid_url(candidate),
            Some(_) => true,
        }
    }

    /// First configured prefix contained in `candidate`.
    #[must_use]
    pub fn id_type(&self, candidate: &str) -> Option<&str> {
        self.prefixes.iter().map(String::as_str).find(|prefix| candidate.contains(prefix))
    }

    /// Returns true if the URL's network location is on the allow-list.
    ///
    /// The location is compared as written, userinfo and port included, so
    /// `user@arxiv.org` and `arxiv.org:443` do not match `arxiv.org`.
    fn is_valid_url(&self, candidate: &str) -> bool {
        let raw = candidate.split_once("URL:").map_or(candidate, |(_, rest)| rest).trim();
        if Url::parse(raw).is_err() {
            return false;
        }
        authority(raw).is_some_and(|netloc| self.url_hosts.iter().any(|allowed| allowed == netloc))
    }
}

impl Default for IdValidator {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Raw authority of `url`: the text between `://` and the path, query or fragment.
fn authority(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Returns true for a 40-character hexadecimal string.
#[must_use]
pub fn is_sha(candidate: &str) -> bool {
    candidate.len() == SHA_LEN && candidate.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validate against the built-in prefix and host lists.
#[must_use]
pub fn is_valid_paper_id(candidate: &str) -> bool {
    IdValidator::default().is_valid_paper_id(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA: &str = "649def34f8be52c8b66281af98ae884c09aef38b";

    #[test]
    fn test_sha_accepted() {
        assert!(is_valid_paper_id(SHA));
        assert!(is_valid_paper_id(&SHA.to_uppercase()));
    }

    #[test]
    fn test_short_or_non_hex_sha_rejected() {
        assert!(!is_valid_paper_id(&SHA[..39]));
        assert!(!is_valid_paper_id("z49def34f8be52c8b66281af98ae884c09aef38b"));
    }

    #[test]
    fn test_prefixed_ids_accepted() {
        assert!(is_valid_paper_id("DOI:10.18653/v1/N18-3011"));
        assert!(is_valid_paper_id("ARXIV:2106.15928"));
        assert!(is_valid_paper_id("CorpusId:215416146"));
        assert!(is_valid_paper_id("PMID:19872477"));
    }

    #[test]
    fn test_prefix_matches_anywhere() {
        assert!(is_valid_paper_id("not-really-a-DOI"));
        assert_eq!(IdValidator::default().id_type("xxPMCIDyy"), Some("PMCID"));
        assert_eq!(IdValidator::default().id_type("DOI:10.3115/ACL-1"), Some("DOI"));
    }

    #[test]
    fn test_unknown_id_rejected() {
        assert!(!is_valid_paper_id("hello world"));
        assert!(!is_valid_paper_id(""));
    }

    #[test]
    fn test_url_ids_checked_against_allow_list() {
        assert!(is_valid_paper_id("URL:https://arxiv.org/abs/2106.15928v1"));
        assert!(is_valid_paper_id("URL:https://aclweb.org/anthology/2020.acl-main.447"));
        assert!(!is_valid_paper_id("URL:https://www.aclweb.org/anthology/2020.acl-main.447"));
        assert!(!is_valid_paper_id("URL:https://evil-arxiv.org/abs/2106.15928"));
        assert!(!is_valid_paper_id("URL:not a url"));
    }

    #[test]
    fn test_url_authority_compared_as_written() {
        assert!(!is_valid_paper_id("URL:https://user@arxiv.org/abs/2106.15928"));
        assert!(!is_valid_paper_id("URL:https://arxiv.org:443/abs/2106.15928"));
        assert!(!is_valid_paper_id("URL:https:arxiv.org/abs/2106.15928"));
        assert!(is_valid_paper_id("URL:https://arxiv.org?id=2106.15928"));
    }

    #[test]
    fn test_custom_lists() {
        let validator = IdValidator::new(vec!["URL".into()], vec!["example.org:8080".into()]);
        assert!(validator.is_valid_paper_id("URL:http://example.org:8080/paper"));
        assert!(!validator.is_valid_paper_id("URL:http://example.org/paper"));
        assert!(!validator.is_valid_paper_id("DOI:10.1/x"));
    }
}
