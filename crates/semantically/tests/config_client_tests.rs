//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use std::time::Duration;

use semantically::client::SemanticScholarClient;
use semantically::config::{Config, ResultPolicy, VALID_ID_PREFIXES, api};
use semantically::ids::IdValidator;
use semantically::{ClientError, Semantically};

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_has_no_api_key() {
    let config = Config::default();
    assert!(!config.has_api_key());
    assert_eq!(config.host(), api::PUBLIC_HOST);
}

#[test]
fn test_config_with_api_key_selects_partner_host() {
    let config = Config::new(Some("test-key".to_string()));
    assert!(config.has_api_key());
    assert_eq!(config.api_key.as_deref(), Some("test-key"));
    assert_eq!(config.host(), api::PARTNER_HOST);
}

#[test]
fn test_config_custom_prefix() {
    let config = Config { api_prefix: "/graph/v2".to_string(), ..Config::default() };
    assert_eq!(config.api_url(), "https://api.semanticscholar.org/graph/v2/");

    let config = Config { api_prefix: String::new(), ..Config::for_testing("http://localhost:9") };
    assert_eq!(config.api_url(), "http://localhost:9/");
}

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.default_offset, 0);
    assert_eq!(config.default_limit, 100);
    assert!((config.title_similarity_threshold - 0.9).abs() < f64::EPSILON);
    assert_eq!(config.valid_id_prefixes.len(), VALID_ID_PREFIXES.len());
    assert_eq!(config.result_policy, ResultPolicy::Strict);
}

#[test]
fn test_config_with_result_policy() {
    let config = Config::default().with_result_policy(ResultPolicy::Lenient);
    assert_eq!(config.result_policy, ResultPolicy::Lenient);
    assert!(!config.result_policy.is_strict());
}

#[test]
fn test_for_testing_shortens_timeouts() {
    let config = Config::for_testing("http://127.0.0.1:1234");
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert!(!config.has_api_key());
}

#[test]
fn test_custom_id_lists_flow_into_validator() {
    let config = Config {
        valid_id_prefixes: vec!["DOI".to_string()],
        valid_url_hosts: vec![],
        ..Config::default()
    };
    let validator = IdValidator::from_config(&config);
    assert!(validator.is_valid_paper_id("DOI:10.18653/v1/N18-3011"));
    assert!(!validator.is_valid_paper_id("ARXIV:2106.15928"));
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    assert!(SemanticScholarClient::new(&Config::default()).is_ok());
}

#[test]
fn test_client_reports_api_key_status() {
    let client = SemanticScholarClient::new(&Config::new(Some("key".to_string()))).unwrap();
    assert!(client.has_api_key());
    assert_eq!(client.api_url(), "https://partner.semanticscholar.org/graph/v1/");

    let client_no_key = SemanticScholarClient::new(&Config::default()).unwrap();
    assert!(!client_no_key.has_api_key());
    assert_eq!(client_no_key.api_url(), "https://api.semanticscholar.org/graph/v1/");
}

#[test]
fn test_client_treats_empty_api_key_as_absent() {
    let client = SemanticScholarClient::new(&Config::new(Some(String::new()))).unwrap();
    assert!(!client.has_api_key());
    assert_eq!(client.api_url(), "https://api.semanticscholar.org/graph/v1/");
}

#[test]
fn test_client_debug_hides_api_key() {
    let client = SemanticScholarClient::new(&Config::new(Some("super-secret-key".to_string()))).unwrap();
    let debug = format!("{client:?}");
    // API key should NOT appear in debug output
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("has_api_key"));
}

#[test]
fn test_facade_creation() {
    let s2 = Semantically::new(Config::default()).unwrap();
    assert_eq!(s2.page_state().total, 0);
    assert!(!s2.config().has_api_key());
}

#[test]
fn test_facade_rejects_unusable_api_key() {
    assert!(Semantically::new(Config::new(Some("line\nbreak".to_string()))).is_err());
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    // Port 9 (discard) is not expected to accept connections
    let config = Config {
        connect_timeout: Duration::from_millis(500),
        request_timeout: Duration::from_secs(1),
        ..Config::for_testing("http://127.0.0.1:9")
    };
    let s2 = Semantically::new(config).unwrap();
    let err = s2.get_author_by_id("1", None).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
