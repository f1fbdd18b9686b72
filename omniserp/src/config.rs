//! Configuration loading for omniserp
//!
//! Configuration is loaded from:
//! 1. Environment variable OMNISERP_CONFIG_PATH
//! 2. ~/.omniserp/config.toml
//! 3. Default values
//!
//! Environment variables then override individual settings:
//! SEARCH_ENGINE, SERPER_API_KEY, SERPAPI_API_KEY, SERPER_BASE_URL and
//! SERPAPI_BASE_URL.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// Serper credentials and endpoint
    #[serde(default)]
    pub serper: ProviderConfig,
    /// SerpAPI credentials and endpoint
    #[serde(default)]
    pub serpapi: ProviderConfig,
}

/// General search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Engine used when none is requested explicitly
    #[serde(default = "default_engine")]
    pub engine: String,
    /// Number of results requested when the caller does not say
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// HTTP timeout per request
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Return normalized results from the MCP server by default
    #[serde(default)]
    pub normalize: bool,
}

/// Per-provider settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key (usually supplied through the environment instead)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Override for the provider's base URL
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_engine() -> String {
    "serper".to_string()
}

fn default_max_results() -> u32 {
    10
}

fn default_timeout() -> u64 {
    30
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            max_results: default_max_results(),
            timeout_seconds: default_timeout(),
            normalize: false,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply the environment
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(&path)?
            }
            Some(_) => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply environment overrides through the given lookup
    ///
    /// Empty values are ignored so that `SERPER_API_KEY=` does not clear a
    /// key set in the file.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(engine) = get("SEARCH_ENGINE") {
            self.search.engine = engine.to_lowercase();
        }
        if let Some(key) = get("SERPER_API_KEY") {
            self.serper.api_key = Some(key);
        }
        if let Some(key) = get("SERPAPI_API_KEY") {
            self.serpapi.api_key = Some(key);
        }
        if let Some(url) = get("SERPER_BASE_URL") {
            self.serper.base_url = Some(url);
        }
        if let Some(url) = get("SERPAPI_BASE_URL") {
            self.serpapi.base_url = Some(url);
        }
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("OMNISERP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".omniserp").join("config.toml"));
        }

        None
    }
}
