//! Serper contract tests
//!
//! Verify the request shape (POST, endpoint path, `X-API-KEY` header, JSON
//! body) and error mapping against a mock server.

use omniserp::config::{ProviderConfig, SearchConfig};
use omniserp::providers::serper::SerperEngine;
use omniserp::{Engine, Error, ScrapeParams, SearchKind, SearchParams};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn engine(server: &MockServer) -> SerperEngine {
    let config = ProviderConfig {
        api_key: Some("test-key".to_string()),
        base_url: Some(server.uri()),
    };
    SerperEngine::new(&config, &SearchConfig::default()).unwrap()
}

#[tokio::test]
async fn test_web_search_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("X-API-KEY", "test-key"))
        .and(body_json(json!({
            "q": "rust",
            "location": "Berlin",
            "hl": "de",
            "gl": "de",
            "num": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic": [{"title": "Rust", "link": "https://rust-lang.org"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = SearchParams::new("rust")
        .with_location("Berlin")
        .with_language("de")
        .with_country("de")
        .with_num_results(3);
    let raw = engine(&server).search(SearchKind::Web, &params).await.unwrap();

    assert_eq!(raw.data["organic"][0]["title"], "Rust");
    assert!(raw.raw_text().contains("rust-lang.org"));
}

#[tokio::test]
async fn test_each_kind_posts_to_its_endpoint() {
    let server = MockServer::start().await;

    for (kind, endpoint) in [
        (SearchKind::News, "/news"),
        (SearchKind::Images, "/images"),
        (SearchKind::Videos, "/videos"),
        (SearchKind::Places, "/places"),
        (SearchKind::Maps, "/maps"),
        (SearchKind::Reviews, "/reviews"),
        (SearchKind::Shopping, "/shopping"),
        (SearchKind::Scholar, "/scholar"),
        (SearchKind::Lens, "/lens"),
        (SearchKind::Autocomplete, "/autocomplete"),
    ] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"kind": endpoint})))
            .expect(1)
            .mount(&server)
            .await;

        let raw = engine(&server)
            .search(kind, &SearchParams::new("q"))
            .await
            .unwrap();
        assert_eq!(raw.data["kind"], endpoint);
    }
}

#[tokio::test]
async fn test_empty_optional_fields_are_not_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/news"))
        .and(body_json(json!({"q": "rust"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"news": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = SearchParams::new("rust").with_location("").with_language("");
    engine(&server).search(SearchKind::News, &params).await.unwrap();
}

#[tokio::test]
async fn test_scrape_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .and(header("X-API-KEY", "test-key"))
        .and(body_json(json!({"url": "https://example.com/page"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "Example page",
            "metadata": {"title": "Example"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let raw = engine(&server)
        .scrape(&ScrapeParams::new("https://example.com/page"))
        .await
        .unwrap();
    assert_eq!(raw.data["text"], "Example page");
}

#[tokio::test]
async fn test_scrape_rejects_bad_url() {
    let server = MockServer::start().await;

    let err = engine(&server)
        .scrape(&ScrapeParams::new("not a url"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_api_error_maps_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Unauthorized."))
        .mount(&server)
        .await;

    let err = engine(&server)
        .search(SearchKind::Web, &SearchParams::new("q"))
        .await
        .unwrap_err();

    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "Unauthorized.");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = engine(&server)
        .search(SearchKind::Web, &SearchParams::new("q"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_missing_api_key() {
    let config = ProviderConfig::default();
    let err = SerperEngine::new(&config, &SearchConfig::default()).err().unwrap();
    assert!(matches!(err, Error::MissingApiKey("SERPER_API_KEY")));
}
