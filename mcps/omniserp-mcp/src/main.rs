//! Omniserp MCP Server
//!
//! Exposes one tool per search operation the active engine supports.
//!
//! # Usage
//!
//! Run directly: `SERPER_API_KEY=... omniserp-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "omniserp": { "command": "./omniserp-mcp" } } }
//! ```

use omniserp_mcp::OmniserpMcpServer;

mcp_common::serve_stdio!("omniserp_mcp", OmniserpMcpServer::from_env()?);
