//! Omniserp MCP Library
//!
//! Google search tools backed by Serper or SerpAPI, served over MCP.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use omniserp_mcp::OmniserpMcpServer;
//!
//! let server = OmniserpMcpServer::from_env()?;
//! // Serve via stdio or call tools in-process through EmbeddableMcp
//! ```
//!
//! # Configuration
//! Set `SERPER_API_KEY` and/or `SERPAPI_API_KEY` (and optionally
//! `SEARCH_ENGINE`), or configure them in `~/.omniserp/config.toml`.

pub mod error;
pub mod server;

pub use server::{EngineInfoResponse, NormalizableSearchParams, OmniserpMcpServer};
