//! In-process MCP execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! stdio transport. It is also how the servers are exercised in tests.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use omniserp_mcp::OmniserpMcpServer;
//!
//! let server = OmniserpMcpServer::new(client, config.search);
//! let result = server
//!     .call_tool("google_search", serde_json::json!({"query": "rust"}))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, ErrorCode, Tool};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with this name is registered
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// The tool rejected its arguments
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// The tool ran and failed
    #[error("tool execution failed: {0}")]
    ExecutionError(String),

    /// Arguments could not be decoded into the tool's parameter type
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        if err.code == ErrorCode::INVALID_PARAMS {
            EmbeddableError::InvalidParams(err.message.to_string())
        } else {
            EmbeddableError::ExecutionError(err.message.to_string())
        }
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be listed and called in-process
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used for the server in MCP configuration files
    fn server_name(&self) -> &str;

    /// Tools currently exposed by the server
    fn list_tools(&self) -> Vec<Tool>;

    /// Call a tool by name with a JSON object of arguments
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }

    /// Names of the exposed tools, sorted
    fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .list_tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyServer;

    #[async_trait]
    impl EmbeddableMcp for EmptyServer {
        fn server_name(&self) -> &str {
            "empty"
        }

        fn list_tools(&self) -> Vec<Tool> {
            vec![]
        }

        async fn call_tool(&self, name: &str, _params: Value) -> EmbeddableResult<CallToolResult> {
            Err(EmbeddableError::ToolNotFound(name.to_string()))
        }
    }

    #[test]
    fn test_defaults() {
        let server = EmptyServer;
        assert_eq!(server.server_name(), "empty");
        assert!(server.tool_names().is_empty());
        assert!(server.server_version().is_none());
    }

    #[test]
    fn test_call_unknown_tool() {
        let server = EmptyServer;
        let result = tokio_test::block_on(server.call_tool("unknown", serde_json::json!({})));
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[test]
    fn test_error_data_conversion_keeps_kind() {
        let invalid: EmbeddableError = rmcp::ErrorData::invalid_params("bad", None).into();
        assert!(matches!(invalid, EmbeddableError::InvalidParams(m) if m == "bad"));

        let internal: EmbeddableError = rmcp::ErrorData::internal_error("boom", None).into();
        assert!(matches!(internal, EmbeddableError::ExecutionError(m) if m == "boom"));
    }
}
