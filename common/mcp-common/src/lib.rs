//! MCP Common - shared plumbing for MCP servers and their CLIs
//!
//! - **Initialization**: [`init_tracing`] and the `serve_stdio!` macro
//! - **Results**: [`json_success`] for pretty JSON tool responses
//! - **Errors**: [`IntoMcpError`] and [`ResultExt`] for `?` in tool handlers
//! - **Embeddable**: [`EmbeddableMcp`] for in-process tool calls

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, ResultExt};
pub use init::{init_tracing, init_tracing_with_level};
pub use result::{first_text, json_success};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
