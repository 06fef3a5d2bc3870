//! Paper search client contract tests against a mocked Semantic Scholar
//! endpoint.

use quill::utils::config::SearchConfig;
use quill::PaperSearchClient;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

fn config_for(server: &MockServer) -> SearchConfig {
    SearchConfig {
        base_url: server.uri(),
        api_key: None,
        limit: 5,
        timeout_secs: 2,
        retries: 0,
    }
}

/// Create one mock Semantic Scholar paper object.
fn mock_paper(title: &str, year: Option<i32>) -> Value {
    json!({
        "title": title,
        "abstract": format!("{} abstract", title),
        "year": year,
        "authors": [{"name": "Doe, J."}],
        "url": format!("https://example.org/{}", title)
    })
}

fn mock_body(papers: Vec<Value>) -> Value {
    json!({ "total": papers.len(), "data": papers })
}

// ============= Contract Tests =============

#[tokio::test]
async fn test_search_normalizes_and_preserves_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paper/search"))
        .and(query_param("query", "graph neural networks"))
        .and(query_param("limit", "5"))
        .and(query_param("fields", "title,abstract,year,authors,url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_body(vec![
            mock_paper("A", Some(2023)),
            mock_paper("B", None),
        ])))
        .mount(&server)
        .await;

    let client = PaperSearchClient::new(&config_for(&server)).expect("client");
    let outcome = client.search("graph neural networks").await;

    assert!(!outcome.is_failure());
    let papers = outcome.papers();
    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].title, "A");
    assert_eq!(papers[0].year, Some(2023));
    assert_eq!(papers[0].abstract_text.as_deref(), Some("A abstract"));
    assert_eq!(papers[0].authors, vec!["Doe, J."]);
    assert_eq!(papers[1].title, "B");
    assert_eq!(papers[1].year, None);
}

#[tokio::test]
async fn test_search_never_exceeds_limit() {
    let server = MockServer::start().await;

    // An over-eager upstream returns more records than requested.
    let papers = (0..8).map(|i| mock_paper(&format!("P{}", i), None)).collect();
    Mock::given(method("GET"))
        .and(path("/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_body(papers)))
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.limit = 3;
    let client = PaperSearchClient::new(&config).expect("client");
    let outcome = client.search("anything").await;

    let papers = outcome.papers();
    assert_eq!(papers.len(), 3);
    assert_eq!(papers[0].title, "P0");
    assert_eq!(papers[2].title, "P2");
}

#[tokio::test]
async fn test_non_2xx_is_failure_with_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paper/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = PaperSearchClient::new(&config_for(&server)).expect("client");
    let outcome = client.search("anything").await;

    assert!(outcome.is_failure());
    assert!(outcome.papers().is_empty());
    assert!(outcome.failure_reason().unwrap_or_default().contains("500"));
}

#[tokio::test]
async fn test_malformed_payload_is_failure_not_panic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = PaperSearchClient::new(&config_for(&server)).expect("client");
    let outcome = client.search("anything").await;

    assert!(outcome.is_failure());
    assert!(outcome
        .failure_reason()
        .unwrap_or_default()
        .contains("undecodable"));
}

#[tokio::test]
async fn test_missing_data_key_is_zero_results_not_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .mount(&server)
        .await;

    let client = PaperSearchClient::new(&config_for(&server)).expect("client");
    let outcome = client.search("anything").await;

    assert!(!outcome.is_failure());
    assert!(outcome.papers().is_empty());
}

#[tokio::test]
async fn test_api_key_is_sent_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paper/search"))
        .and(header("x-api-key", "sk-scholar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_body(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.api_key = Some("sk-scholar".to_string());
    let client = PaperSearchClient::new(&config).expect("client");
    let outcome = client.search("anything").await;

    assert!(!outcome.is_failure());
}

#[tokio::test]
async fn test_default_config_makes_exactly_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paper/search"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = PaperSearchClient::new(&config_for(&server)).expect("client");
    let outcome = client.search("anything").await;

    assert!(outcome.is_failure());
    // The mock's expect(1) verifies no retry happened on drop.
}

#[tokio::test]
async fn test_configured_retry_recovers_from_transient_failure() {
    let server = MockServer::start().await;

    // First attempt fails, second succeeds.
    Mock::given(method("GET"))
        .and(path("/paper/search"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/paper/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(mock_body(vec![mock_paper("A", None)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.retries = 1;
    let client = PaperSearchClient::new(&config).expect("client");
    let outcome = client.search("anything").await;

    assert!(!outcome.is_failure());
    assert_eq!(outcome.papers().len(), 1);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_failure() {
    // Nothing listens on this port; the connect error must degrade to a
    // tagged failure, not an Err or a panic.
    let config = SearchConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: None,
        limit: 5,
        timeout_secs: 1,
        retries: 0,
    };
    let client = PaperSearchClient::new(&config).expect("client");
    let outcome = client.search("anything").await;

    assert!(outcome.is_failure());
    assert!(outcome
        .failure_reason()
        .unwrap_or_default()
        .contains("request failed"));
}
