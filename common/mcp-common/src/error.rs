//! Error conversion for MCP tool handlers
//!
//! Servers implement [`IntoMcpError`] (or their own extension trait built on
//! [`internal_error`] and [`invalid_params`]) for the errors their handlers
//! encounter, then use `?` after `to_mcp_err()`.

use rmcp::ErrorData as McpError;

/// Conversion into an MCP error
///
/// ```rust,ignore
/// impl IntoMcpError for MyError {
///     fn into_mcp_error(self) -> McpError {
///         mcp_common::internal_error(self.to_string())
///     }
/// }
/// ```
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        internal_error(format!("JSON error: {}", self))
    }
}

/// Extension trait adding `to_mcp_err()` to results
///
/// ```rust,ignore
/// use mcp_common::ResultExt;
///
/// let json = serde_json::to_string_pretty(&data).to_mcp_err()?;
/// ```
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> Result<T, McpError>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> Result<T, McpError> {
        self.map_err(|e| e.into_mcp_error())
    }
}

pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}
