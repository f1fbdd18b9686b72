//! Mapping of search failures onto MCP error codes
//!
//! Caller mistakes (bad parameters, an operation the engine lacks, an
//! unknown engine) become `invalid_params`; everything else is an
//! `internal_error`.

use mcp_common::{internal_error, invalid_params, McpError};

pub fn into_mcp_error(err: omniserp::Error) -> McpError {
    if err.is_client_error() {
        invalid_params(err.to_string())
    } else {
        internal_error(err.to_string())
    }
}

/// `to_mcp_err()` for results coming back from the search client
pub trait SearchResultExt<T> {
    fn to_mcp_err(self) -> Result<T, McpError>;
}

impl<T> SearchResultExt<T> for omniserp::Result<T> {
    fn to_mcp_err(self) -> Result<T, McpError> {
        self.map_err(into_mcp_error)
    }
}
