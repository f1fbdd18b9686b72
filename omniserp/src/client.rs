//! Search client facade
//!
//! [`Client`] owns the [`Registry`] and one active engine. Every call is
//! validated and checked against the engine's capability list before it
//! reaches the network.

use std::sync::Arc;

use crate::config::Config;
use crate::engine::{Engine, EngineInfo};
use crate::error::{Error, Result};
use crate::normalize::{NormalizedResult, Normalizer};
use crate::registry::Registry;
use crate::types::{Category, Operation, RawResult, ScrapeParams, SearchKind, SearchParams};

#[derive(Clone)]
pub struct Client {
    registry: Registry,
    engine: Arc<dyn Engine>,
}

impl Client {
    /// Create a client on an explicitly named engine
    pub fn new(registry: Registry, engine_name: &str) -> Result<Self> {
        let engine = registry.require(engine_name)?;
        Ok(Self { registry, engine })
    }

    /// Create a client on the preferred engine, falling back when it is not registered
    pub fn with_default(registry: Registry, preferred: &str) -> Result<Self> {
        let selected = registry.resolve_default(preferred)?;
        if let Some(requested) = &selected.fell_back_from {
            tracing::warn!(
                "Engine '{}' not available, using '{}'",
                requested,
                selected.engine.name()
            );
        }
        Ok(Self {
            registry,
            engine: selected.engine,
        })
    }

    /// Build the registry from config and select the configured engine
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_default(Registry::from_config(config), &config.search.engine)
    }

    /// Name of the active engine
    pub fn name(&self) -> &str {
        self.engine.name()
    }

    pub fn version(&self) -> &str {
        self.engine.version()
    }

    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn engine_names(&self) -> Vec<String> {
        self.registry.names()
    }

    pub fn supported_tools(&self) -> Vec<String> {
        self.engine.supported_tools()
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.engine.supports(operation)
    }

    pub fn info(&self) -> EngineInfo {
        EngineInfo::of(self.engine.as_ref())
    }

    /// Switch the active engine
    pub fn set_engine(&mut self, name: &str) -> Result<()> {
        self.engine = self.registry.require(name)?;
        tracing::info!("Switched search engine to {}", name);
        Ok(())
    }

    fn check_support(&self, operation: Operation) -> Result<()> {
        if self.engine.supports(operation) {
            return Ok(());
        }
        Err(Error::OperationNotSupported {
            operation: operation.tool_name().to_string(),
            engine: self.engine.name().to_string(),
            supported: self.engine.supported_tools(),
        })
    }

    /// Run a search of any kind on the active engine
    pub async fn search_kind(&self, kind: SearchKind, params: &SearchParams) -> Result<RawResult> {
        params.validate()?;
        self.check_support(Operation::Search(kind))?;

        tracing::info!("Searching ({}) via {}: {}", kind, self.engine.name(), params.query);
        self.engine.search(kind, params).await
    }

    pub async fn search(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::Web, params).await
    }

    pub async fn search_news(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::News, params).await
    }

    pub async fn search_images(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::Images, params).await
    }

    pub async fn search_videos(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::Videos, params).await
    }

    pub async fn search_places(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::Places, params).await
    }

    pub async fn search_maps(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::Maps, params).await
    }

    pub async fn search_reviews(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::Reviews, params).await
    }

    pub async fn search_shopping(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::Shopping, params).await
    }

    pub async fn search_scholar(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::Scholar, params).await
    }

    pub async fn search_lens(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::Lens, params).await
    }

    pub async fn autocomplete(&self, params: &SearchParams) -> Result<RawResult> {
        self.search_kind(SearchKind::Autocomplete, params).await
    }

    /// Fetch a single webpage through the active engine
    pub async fn scrape(&self, params: &ScrapeParams) -> Result<RawResult> {
        if params.url.trim().is_empty() {
            return Err(Error::InvalidParams("url cannot be empty".into()));
        }
        self.check_support(Operation::ScrapeWebpage)?;

        tracing::info!("Scraping via {}: {}", self.engine.name(), params.url);
        self.engine.scrape(params).await
    }

    /// Search and convert the response into the engine-agnostic schema
    pub async fn search_normalized(
        &self,
        category: Category,
        params: &SearchParams,
    ) -> Result<NormalizedResult> {
        let raw = self.search_kind(category.into(), params).await?;
        let normalized = Normalizer::new(self.engine.name()).normalize(category, raw, &params.query)?;
        Ok(normalized)
    }

    pub async fn search_web_normalized(&self, params: &SearchParams) -> Result<NormalizedResult> {
        self.search_normalized(Category::Web, params).await
    }

    pub async fn search_news_normalized(&self, params: &SearchParams) -> Result<NormalizedResult> {
        self.search_normalized(Category::News, params).await
    }

    pub async fn search_images_normalized(
        &self,
        params: &SearchParams,
    ) -> Result<NormalizedResult> {
        self.search_normalized(Category::Images, params).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("engine", &self.engine.name())
            .field("registry", &self.registry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::StubEngine;
    use crate::error::NormalizeError;
    use serde_json::json;
    use std::sync::atomic::Ordering;

    fn registry_with(engines: Vec<StubEngine>) -> Registry {
        let mut registry = Registry::new();
        for engine in engines {
            registry.register(Arc::new(engine));
        }
        registry
    }

    #[test]
    fn test_new_requires_registered_engine() {
        let registry = registry_with(vec![StubEngine::new("serper", json!({}))]);
        assert!(Client::new(registry.clone(), "serper").is_ok());
        assert!(matches!(
            Client::new(registry, "bing"),
            Err(Error::EngineNotFound { .. })
        ));
    }

    #[test]
    fn test_with_default_falls_back() {
        let registry = registry_with(vec![StubEngine::new("serpapi", json!({}))]);
        let client = Client::with_default(registry, "serper").unwrap();
        assert_eq!(client.name(), "serpapi");
    }

    #[test]
    fn test_with_default_empty_registry() {
        assert!(matches!(
            Client::with_default(Registry::new(), "serper"),
            Err(Error::NoEnginesAvailable)
        ));
    }

    #[test]
    fn test_set_engine() {
        let registry = registry_with(vec![
            StubEngine::new("serper", json!({})),
            StubEngine::new("serpapi", json!({})),
        ]);
        let mut client = Client::new(registry, "serper").unwrap();

        client.set_engine("serpapi").unwrap();
        assert_eq!(client.name(), "serpapi");

        assert!(client.set_engine("bing").is_err());
        assert_eq!(client.name(), "serpapi");
        assert_eq!(client.engine_names(), vec!["serper", "serpapi"]);
    }

    #[tokio::test]
    async fn test_unsupported_operation_never_reaches_engine() {
        let engine = Arc::new(
            StubEngine::new("serpapi", json!({})).without(Operation::Search(SearchKind::Lens)),
        );
        let mut registry = Registry::new();
        registry.register(engine.clone());
        let client = Client::new(registry, "serpapi").unwrap();

        let err = client.search_lens(&SearchParams::new("q")).await.unwrap_err();
        match err {
            Error::OperationNotSupported {
                operation,
                engine: name,
                supported,
            } => {
                assert_eq!(operation, "google_search_lens");
                assert_eq!(name, "serpapi");
                assert!(!supported.contains(&"google_search_lens".to_string()));
            }
            other => panic!("expected OperationNotSupported, got {:?}", other),
        }
        assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_params_rejected() {
        let client = Client::new(
            registry_with(vec![StubEngine::new("serper", json!({}))]),
            "serper",
        )
        .unwrap();

        let empty = client.search(&SearchParams::new("  ")).await;
        assert!(matches!(empty, Err(Error::InvalidParams(_))));

        let too_many = client
            .search(&SearchParams::new("q").with_num_results(101))
            .await;
        assert!(matches!(too_many, Err(Error::InvalidParams(_))));

        let no_url = client.scrape(&ScrapeParams::new("")).await;
        assert!(matches!(no_url, Err(Error::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_search_forwards_raw_result() {
        let payload = json!({"organic": [{"title": "T"}]});
        let client = Client::new(
            registry_with(vec![StubEngine::new("serper", payload.clone())]),
            "serper",
        )
        .unwrap();

        let raw = client.search(&SearchParams::new("q")).await.unwrap();
        assert_eq!(raw.data, payload);
        assert!(!raw.raw.is_empty());
    }

    #[tokio::test]
    async fn test_search_normalized_uses_active_engine() {
        let payload = json!({
            "organic": [{"title": "T1", "link": "https://a"}],
            "answerBox": {"title": "AB", "answer": "X"}
        });
        let client = Client::new(
            registry_with(vec![StubEngine::new("serper", payload)]),
            "serper",
        )
        .unwrap();

        let result = client
            .search_web_normalized(&SearchParams::new("rust"))
            .await
            .unwrap();
        assert_eq!(result.organic_results.len(), 1);
        assert_eq!(result.search_metadata.engine, "serper");
        assert_eq!(result.search_metadata.query, "rust");
        assert_eq!(result.answer_box.unwrap().answer, "X");
    }

    #[tokio::test]
    async fn test_search_normalized_unknown_engine() {
        let client = Client::new(
            registry_with(vec![StubEngine::new("custom", json!({}))]),
            "custom",
        )
        .unwrap();

        let err = client
            .search_news_normalized(&SearchParams::new("q"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Normalize(NormalizeError::UnsupportedProvider(_))
        ));
    }

    #[test]
    fn test_info() {
        let client = Client::new(
            registry_with(vec![StubEngine::new("serper", json!({}))]),
            "serper",
        )
        .unwrap();
        let info = client.info();
        assert_eq!(info.name, "serper");
        assert_eq!(info.supported_tools, client.supported_tools());
        assert!(client.supports(Operation::ScrapeWebpage));
    }
}
