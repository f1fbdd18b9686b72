//! omniserp - unified web search client
//!
//! One interface over two hosted Google search APIs:
//!
//! - **Serper** (`google.serper.dev`): JSON POST, `X-API-KEY` header
//! - **SerpAPI** (`serpapi.com`): GET with an `api_key` query parameter
//!
//! Both return engine-specific JSON. The [`normalize`] module maps web, news
//! and image responses into a single [`NormalizedResult`] schema so callers
//! can switch engines without touching their parsing code.
//!
//! # Usage
//!
//! ```rust,ignore
//! use omniserp::{Client, Config, SearchParams};
//!
//! let config = Config::load()?;
//! let client = Client::from_config(&config)?;
//!
//! let params = SearchParams::new("rust async").with_num_results(5);
//! let result = client.search_web_normalized(&params).await?;
//! for hit in &result.organic_results {
//!     println!("{}. {} - {}", hit.position, hit.title, hit.link);
//! }
//! ```
//!
//! # Configuration
//! Set `SERPER_API_KEY` and/or `SERPAPI_API_KEY`, or configure them in
//! `~/.omniserp/config.toml`. `SEARCH_ENGINE` picks the default engine.

pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod providers;
pub mod registry;
pub mod types;

pub use client::Client;
pub use config::Config;
pub use engine::{Engine, EngineInfo};
pub use error::{Error, NormalizeError, Result};
pub use normalize::{NormalizedResult, Normalizer, Provider};
pub use registry::Registry;
pub use types::{Category, Operation, RawResult, ScrapeParams, SearchKind, SearchParams};
