//! Search engine abstraction
//!
//! Every upstream provider implements [`Engine`]. The trait only moves bytes:
//! it turns [`SearchParams`] into an HTTP call and returns the decoded body.
//! Interpreting the body is the job of [`crate::normalize`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Operation, RawResult, ScrapeParams, SearchKind, SearchParams};

/// Trait for search engine backends
#[async_trait]
pub trait Engine: Send + Sync {
    /// Registry key of this engine (lower-case)
    fn name(&self) -> &str;

    /// Version of the engine implementation
    fn version(&self) -> &str;

    /// Operations this engine can serve
    fn supported_operations(&self) -> &[Operation];

    /// Run a search of the given kind
    async fn search(&self, kind: SearchKind, params: &SearchParams) -> Result<RawResult>;

    /// Fetch the content of a single webpage
    async fn scrape(&self, params: &ScrapeParams) -> Result<RawResult>;

    fn supports(&self, operation: Operation) -> bool {
        self.supported_operations().contains(&operation)
    }

    /// Tool names of the supported operations
    fn supported_tools(&self) -> Vec<String> {
        self.supported_operations()
            .iter()
            .map(|op| op.tool_name().to_string())
            .collect()
    }
}

/// Descriptive information about an engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineInfo {
    pub name: String,
    pub version: String,
    pub supported_tools: Vec<String>,
}

impl EngineInfo {
    pub fn of(engine: &dyn Engine) -> Self {
        Self {
            name: engine.name().to_string(),
            version: engine.version().to_string(),
            supported_tools: engine.supported_tools(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StubEngine;
    use super::*;

    #[test]
    fn test_engine_info_lists_tool_names() {
        let engine = StubEngine::new("stub", serde_json::json!({}))
            .without(Operation::Search(SearchKind::Lens));
        let info = EngineInfo::of(&engine);

        assert_eq!(info.name, "stub");
        assert_eq!(info.version, "0.0.1");
        assert_eq!(info.supported_tools.len(), 11);
        assert!(!info.supported_tools.contains(&"google_search_lens".to_string()));
        assert!(info.supported_tools.contains(&"webpage_scrape".to_string()));
    }

    #[test]
    fn test_supports() {
        let engine = StubEngine::new("stub", serde_json::json!({}))
            .without(Operation::ScrapeWebpage);
        assert!(engine.supports(Operation::Search(SearchKind::Web)));
        assert!(!engine.supports(Operation::ScrapeWebpage));
    }
}
