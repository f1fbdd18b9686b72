//! Engine registry
//!
//! An owned, insertion-ordered collection of engines keyed by name. It is
//! built once at startup (see [`Registry::from_config`]) and handed to the
//! [`crate::Client`]; nothing here is global.

use std::sync::Arc;

use crate::config::Config;
use crate::engine::{Engine, EngineInfo};
use crate::error::{Error, Result};
use crate::providers::{serpapi::SerpApiEngine, serper::SerperEngine, SERPER};

/// Outcome of resolving the default engine
pub struct DefaultEngine {
    pub engine: Arc<dyn Engine>,
    /// Name that was asked for, when a different engine had to be used
    pub fell_back_from: Option<String>,
}

#[derive(Clone, Default)]
pub struct Registry {
    engines: Vec<Arc<dyn Engine>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry with every engine that has credentials configured
    ///
    /// Engines that fail to initialize are skipped and logged.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();

        match SerperEngine::new(&config.serper, &config.search) {
            Ok(engine) => {
                registry.register(Arc::new(engine));
                tracing::info!("Registered Serper engine");
            }
            Err(e) => tracing::info!("Failed to initialize Serper engine: {}", e),
        }

        match SerpApiEngine::new(&config.serpapi, &config.search) {
            Ok(engine) => {
                registry.register(Arc::new(engine));
                tracing::info!("Registered SerpAPI engine");
            }
            Err(e) => tracing::info!("Failed to initialize SerpAPI engine: {}", e),
        }

        registry
    }

    /// Add an engine, replacing any engine already registered under its name
    pub fn register(&mut self, engine: Arc<dyn Engine>) {
        match self.engines.iter_mut().find(|e| e.name() == engine.name()) {
            Some(slot) => *slot = engine,
            None => self.engines.push(engine),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Engine>> {
        self.engines.iter().find(|e| e.name() == name).cloned()
    }

    /// Look up an engine, failing with the list of available names
    pub fn require(&self, name: &str) -> Result<Arc<dyn Engine>> {
        self.get(name).ok_or_else(|| Error::EngineNotFound {
            name: name.to_string(),
            available: self.names(),
        })
    }

    /// Registered engine names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.engines.iter().map(|e| e.name().to_string()).collect()
    }

    pub fn engines(&self) -> impl Iterator<Item = &Arc<dyn Engine>> {
        self.engines.iter()
    }

    pub fn info(&self) -> Vec<EngineInfo> {
        self.engines.iter().map(|e| EngineInfo::of(e.as_ref())).collect()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Pick the engine to use when the caller did not name one explicitly
    ///
    /// Tries `preferred`, then `serper`, then the first registered engine.
    pub fn resolve_default(&self, preferred: &str) -> Result<DefaultEngine> {
        if let Some(engine) = self.get(preferred) {
            return Ok(DefaultEngine {
                engine,
                fell_back_from: None,
            });
        }

        let engine = self
            .get(SERPER)
            .or_else(|| self.engines.first().cloned())
            .ok_or(Error::NoEnginesAvailable)?;

        Ok(DefaultEngine {
            engine,
            fell_back_from: Some(preferred.to_string()),
        })
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("engines", &self.names())
            .finish()
    }
}
