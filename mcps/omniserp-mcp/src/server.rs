//! MCP Server implementation for omniserp
//!
//! Every search operation is a tool named after the operation
//! (`google_search`, `google_search_news`, ..., `webpage_scrape`). Tools the
//! active engine cannot serve are removed from the router at startup, so
//! clients never see them.

use std::sync::Arc;

use mcp_common::{
    async_trait, json_success, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError,
};
use omniserp::config::SearchConfig;
use omniserp::types::MAX_NUM_RESULTS;
use omniserp::{Category, Client, Config, EngineInfo, Operation, ScrapeParams, SearchKind, SearchParams};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SearchResultExt;

/// The main Omniserp MCP Server
#[derive(Clone)]
pub struct OmniserpMcpServer {
    client: Arc<Client>,
    settings: SearchConfig,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

/// Search parameters for tools that can return normalized results
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NormalizableSearchParams {
    #[serde(flatten)]
    pub search: SearchParams,

    #[schemars(
        description = "Return results in the engine-independent normalized format instead of the raw engine response"
    )]
    pub normalized: Option<bool>,
}

/// Response of the `get_engine_info` tool
#[derive(Debug, Serialize, Deserialize)]
pub struct EngineInfoResponse {
    #[serde(flatten)]
    pub engine: EngineInfo,
    pub available_engines: Vec<String>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl OmniserpMcpServer {
    /// Create a server around a client, exposing only supported tools
    pub fn new(client: Client, settings: SearchConfig) -> Self {
        let mut tool_router = Self::tool_router();
        let mut skipped = Vec::new();

        for operation in Operation::all() {
            if !client.supports(operation) {
                tool_router.remove_route(operation.tool_name());
                skipped.push(operation.tool_name());
            }
        }

        tracing::info!(
            "Using engine: {} v{} (available: {:?})",
            client.name(),
            client.version(),
            client.engine_names()
        );
        if !skipped.is_empty() {
            tracing::info!("Skipped {} unsupported tools: {:?}", skipped.len(), skipped);
        }

        Self {
            client: Arc::new(client),
            settings,
            tool_router,
        }
    }

    /// Load config from file and environment, then build the client
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::load()?;
        let client = Client::from_config(&config)?;
        Ok(Self::new(client, config.search))
    }

    // ========================================================================
    // Search Tools
    // ========================================================================

    #[tool(description = "Perform a Google web search")]
    async fn google_search(
        &self,
        Parameters(params): Parameters<NormalizableSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_normalizable(Category::Web, params).await
    }

    #[tool(description = "Search for news articles using Google News")]
    async fn google_search_news(
        &self,
        Parameters(params): Parameters<NormalizableSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_normalizable(Category::News, params).await
    }

    #[tool(description = "Search for images using Google Images")]
    async fn google_search_images(
        &self,
        Parameters(params): Parameters<NormalizableSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_normalizable(Category::Images, params).await
    }

    #[tool(description = "Search for videos using Google Videos")]
    async fn google_search_videos(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(SearchKind::Videos, params).await
    }

    #[tool(description = "Search for places using Google Places")]
    async fn google_search_places(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(SearchKind::Places, params).await
    }

    #[tool(description = "Search for locations using Google Maps")]
    async fn google_search_maps(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(SearchKind::Maps, params).await
    }

    #[tool(description = "Search for reviews")]
    async fn google_search_reviews(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(SearchKind::Reviews, params).await
    }

    #[tool(description = "Search for products using Google Shopping")]
    async fn google_search_shopping(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(SearchKind::Shopping, params).await
    }

    #[tool(description = "Search for academic papers using Google Scholar")]
    async fn google_search_scholar(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(SearchKind::Scholar, params).await
    }

    #[tool(description = "Perform visual search using Google Lens (query is an image URL)")]
    async fn google_search_lens(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(SearchKind::Lens, params).await
    }

    #[tool(description = "Get search suggestions using Google Autocomplete")]
    async fn google_search_autocomplete(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(SearchKind::Autocomplete, params).await
    }

    // ========================================================================
    // Other Tools
    // ========================================================================

    #[tool(description = "Scrape content from a webpage")]
    async fn webpage_scrape(
        &self,
        Parameters(params): Parameters<ScrapeParams>,
    ) -> Result<CallToolResult, McpError> {
        let raw = self.client.scrape(&params).await.to_mcp_err()?;
        json_success(&raw.data)
    }

    #[tool(description = "Show the active search engine, its version, supported tools and all available engines")]
    async fn get_engine_info(&self) -> Result<CallToolResult, McpError> {
        json_success(&EngineInfoResponse {
            engine: self.client.info(),
            available_engines: self.client.engine_names(),
        })
    }
}

impl OmniserpMcpServer {
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fill in `num_results` from config, kept within the accepted range
    fn with_defaults(&self, mut params: SearchParams) -> SearchParams {
        if params.num_results.is_none() {
            params.num_results = Some(self.settings.max_results.clamp(1, MAX_NUM_RESULTS));
        }
        params
    }

    async fn run_search(
        &self,
        kind: SearchKind,
        params: SearchParams,
    ) -> Result<CallToolResult, McpError> {
        let params = self.with_defaults(params);
        let raw = self.client.search_kind(kind, &params).await.to_mcp_err()?;
        json_success(&raw.data)
    }

    async fn run_normalizable(
        &self,
        category: Category,
        params: NormalizableSearchParams,
    ) -> Result<CallToolResult, McpError> {
        let normalized = params.normalized.unwrap_or(self.settings.normalize);
        let search = self.with_defaults(params.search);

        if !normalized {
            return self.run_search(category.into(), search).await;
        }

        let result = self
            .client
            .search_normalized(category, &search)
            .await
            .to_mcp_err()?;
        json_success(&result)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for OmniserpMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                format!(
                    "Omniserp MCP Server - Google search through the {} engine. \
                     Web, news and image searches accept `normalized: true` for an \
                     engine-independent result format. Use get_engine_info to see \
                     which tools the engine supports.",
                    self.client.name()
                )
                .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for OmniserpMcpServer {
    fn server_name(&self) -> &str {
        "omniserp"
    }

    fn server_description(&self) -> Option<&str> {
        Some(
            "Omniserp MCP Server - Google web, news, image, video, places, maps, \
             reviews, shopping, scholar, lens and autocomplete search plus webpage \
             scraping via Serper or SerpAPI.",
        )
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        if !self.list_tools().iter().any(|t| t.name == name) {
            return Err(EmbeddableError::ToolNotFound(name.to_string()));
        }

        match name {
            "google_search" => {
                let params: NormalizableSearchParams = serde_json::from_value(params)?;
                self.google_search(Parameters(params)).await.map_err(Into::into)
            }

            "google_search_news" => {
                let params: NormalizableSearchParams = serde_json::from_value(params)?;
                self.google_search_news(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "google_search_images" => {
                let params: NormalizableSearchParams = serde_json::from_value(params)?;
                self.google_search_images(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "webpage_scrape" => {
                let params: ScrapeParams = serde_json::from_value(params)?;
                self.webpage_scrape(Parameters(params)).await.map_err(Into::into)
            }

            "get_engine_info" => self.get_engine_info().await.map_err(Into::into),

            other => {
                let kind = Operation::all()
                    .into_iter()
                    .find_map(|op| match op {
                        Operation::Search(kind) if op.tool_name() == other => Some(kind),
                        _ => None,
                    })
                    .ok_or_else(|| EmbeddableError::ToolNotFound(other.to_string()))?;

                let params: SearchParams = serde_json::from_value(params)?;
                self.run_search(kind, params).await.map_err(Into::into)
            }
        }
    }
}
