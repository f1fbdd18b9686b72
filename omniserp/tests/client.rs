//! End-to-end client tests against mock Serper and SerpAPI servers

use omniserp::{Client, Config, Error, SearchParams};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(serper: Option<&MockServer>, serpapi: Option<&MockServer>) -> Config {
    let mut config = Config::default();
    if let Some(server) = serper {
        config.serper.api_key = Some("serper-key".to_string());
        config.serper.base_url = Some(server.uri());
    }
    if let Some(server) = serpapi {
        config.serpapi.api_key = Some("serpapi-key".to_string());
        config.serpapi.base_url = Some(server.uri());
    }
    config
}

#[tokio::test]
async fn test_normalized_results_match_across_engines() {
    let serper = MockServer::start().await;
    let serpapi = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("X-API-KEY", "serper-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "searchParameters": {"q": "ferris", "gl": "us"},
            "organic": [
                {"title": "Ferris", "link": "https://rustacean.net", "snippet": "The crab", "position": 1},
                {"title": "Rust", "link": "https://rust-lang.org", "snippet": "A language", "position": 2}
            ],
            "relatedSearches": [{"query": "ferris plush"}]
        })))
        .mount(&serper)
        .await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("api_key", "serpapi-key"))
        .and(query_param("engine", "google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "search_parameters": {"q": "ferris", "gl": "us", "engine": "google"},
            "organic_results": [
                {"position": 1, "title": "Ferris", "link": "https://rustacean.net", "snippet": "The crab"},
                {"position": 2, "title": "Rust", "link": "https://rust-lang.org", "snippet": "A language"}
            ],
            "related_searches": [{"query": "ferris plush"}]
        })))
        .mount(&serpapi)
        .await;

    let mut client = Client::from_config(&config(Some(&serper), Some(&serpapi))).unwrap();
    assert_eq!(client.name(), "serper");

    let params = SearchParams::new("ferris");
    let a = client.search_web_normalized(&params).await.unwrap();

    client.set_engine("serpapi").unwrap();
    let b = client.search_web_normalized(&params).await.unwrap();

    assert_eq!(a.search_metadata.engine, "serper");
    assert_eq!(b.search_metadata.engine, "serpapi");
    assert_eq!(a.organic_results, b.organic_results);
    assert_eq!(a.related_searches, b.related_searches);
    assert_eq!(a.search_metadata.country, "us");
    assert_eq!(b.search_metadata.country, "us");
}

#[tokio::test]
async fn test_configured_engine_is_selected() {
    let serper = MockServer::start().await;
    let serpapi = MockServer::start().await;

    let mut config = config(Some(&serper), Some(&serpapi));
    config.search.engine = "serpapi".to_string();

    let client = Client::from_config(&config).unwrap();
    assert_eq!(client.name(), "serpapi");
    assert_eq!(client.engine_names(), vec!["serper", "serpapi"]);
}

#[tokio::test]
async fn test_missing_configured_engine_falls_back() {
    let serpapi = MockServer::start().await;

    let client = Client::from_config(&config(None, Some(&serpapi))).unwrap();
    assert_eq!(client.name(), "serpapi");
    assert_eq!(client.engine_names(), vec!["serpapi"]);
}

#[test]
fn test_no_keys_means_no_engines() {
    let err = Client::from_config(&Config::default()).unwrap_err();
    assert!(matches!(err, Error::NoEnginesAvailable));
}

#[tokio::test]
async fn test_lens_rejected_before_request_on_serpapi() {
    let serpapi = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&serpapi)
        .await;

    let client = Client::from_config(&config(None, Some(&serpapi))).unwrap();
    let err = client
        .search_lens(&SearchParams::new("https://example.com/cat.jpg"))
        .await
        .unwrap_err();

    assert!(err.is_client_error());
    assert!(err.to_string().contains("google_search_lens"));
}

#[tokio::test]
async fn test_malformed_response_surfaces_as_normalize_error() {
    let serper = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&serper)
        .await;

    let client = Client::from_config(&config(Some(&serper), None)).unwrap();
    let err = client
        .search_images_normalized(&SearchParams::new("q"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Normalize(omniserp::NormalizeError::MalformedResponse(_))
    ));
}
