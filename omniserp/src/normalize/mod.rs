//! Response normalization
//!
//! Converts an engine-specific JSON document into a [`NormalizedResult`].
//! Each supported engine has one mapping module; [`Provider`] is the closed
//! set of engines with a mapping, so adding one is a new variant plus a new
//! module.
//!
//! Normalization is best effort. Only two things are errors: a response
//! whose root is not a JSON object, and an engine without a mapping. Missing
//! keys, wrongly typed values and non-object list elements are absorbed as
//! empty strings or empty collections.
//!
//! ```rust,ignore
//! use omniserp::normalize::Normalizer;
//!
//! let normalized = Normalizer::new("serper").normalize_search(raw, "rust")?;
//! for hit in &normalized.organic_results {
//!     println!("{}. {}", hit.position, hit.title);
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::types::{Category, RawResult};

mod lenient;
pub mod schema;
mod serpapi;
mod serper;

pub use schema::{
    AnswerBox, ImageResult, KnowledgeGraph, NewsResult, NormalizedResult, OrganicResult,
    PeopleAlsoAsk, RelatedSearch, SearchMetadata,
};

use lenient::Text;

/// Engines with a field mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Serper,
    SerpApi,
}

impl Provider {
    pub fn all() -> &'static [Provider] {
        &[Self::Serper, Self::SerpApi]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Serper => crate::providers::SERPER,
            Self::SerpApi => crate::providers::SERPAPI,
        }
    }

    fn apply(
        &self,
        data: &Value,
        category: Category,
        out: &mut NormalizedResult,
    ) -> Result<(), serde_json::Error> {
        match self {
            Self::Serper => serper::normalize(data, category, out),
            Self::SerpApi => serpapi::normalize(data, category, out),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| NormalizeError::UnsupportedProvider(s.to_string()))
    }
}

/// The engine's echo of the parameters it actually searched with
///
/// Both engines use the Google parameter names here.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchEcho {
    q: Text,
    location: Text,
    hl: Text,
    gl: Text,
}

impl SearchEcho {
    /// Overwrite caller-supplied metadata with every value the engine reported
    fn apply(self, metadata: &mut SearchMetadata) {
        if let Some(q) = self.q.into_option() {
            metadata.query = q;
        }
        if let Some(location) = self.location.into_option() {
            metadata.location = location;
        }
        if let Some(hl) = self.hl.into_option() {
            metadata.language = hl;
        }
        if let Some(gl) = self.gl.into_option() {
            metadata.country = gl;
        }
    }
}

/// Converts responses of one named engine into the normalized format
#[derive(Debug, Clone)]
pub struct Normalizer {
    engine: String,
}

impl Normalizer {
    /// Create a normalizer for the named engine
    ///
    /// The name is not checked here; an unknown engine fails on the first
    /// call to [`Normalizer::normalize`].
    pub fn new(engine_name: &str) -> Self {
        Self {
            engine: engine_name.to_lowercase(),
        }
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn normalize(
        &self,
        category: Category,
        raw: RawResult,
        query: &str,
    ) -> Result<NormalizedResult, NormalizeError> {
        check_root(&raw)?;
        let provider: Provider = self.engine.parse()?;
        run(provider, &self.engine, category, raw, query)
    }

    pub fn normalize_search(
        &self,
        raw: RawResult,
        query: &str,
    ) -> Result<NormalizedResult, NormalizeError> {
        self.normalize(Category::Web, raw, query)
    }

    pub fn normalize_news(
        &self,
        raw: RawResult,
        query: &str,
    ) -> Result<NormalizedResult, NormalizeError> {
        self.normalize(Category::News, raw, query)
    }

    pub fn normalize_images(
        &self,
        raw: RawResult,
        query: &str,
    ) -> Result<NormalizedResult, NormalizeError> {
        self.normalize(Category::Images, raw, query)
    }
}

/// Normalize a response from a known provider
pub fn normalize(
    provider: Provider,
    category: Category,
    raw: RawResult,
    query: &str,
) -> Result<NormalizedResult, NormalizeError> {
    check_root(&raw)?;
    run(provider, provider.name(), category, raw, query)
}

fn check_root(raw: &RawResult) -> Result<(), NormalizeError> {
    let found = match &raw.data {
        Value::Object(_) => return Ok(()),
        Value::Null => "null",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
    };
    Err(NormalizeError::MalformedResponse(format!(
        "expected a JSON object, found {}",
        found
    )))
}

fn run(
    provider: Provider,
    engine: &str,
    category: Category,
    raw: RawResult,
    query: &str,
) -> Result<NormalizedResult, NormalizeError> {
    let mut out = NormalizedResult {
        search_metadata: SearchMetadata {
            engine: engine.to_string(),
            query: query.to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    provider
        .apply(&raw.data, category, &mut out)
        .map_err(|e| NormalizeError::MalformedResponse(e.to_string()))?;

    tracing::debug!(
        "Normalized {} {} response: {} organic, {} news, {} images",
        engine,
        category,
        out.organic_results.len(),
        out.news_results.len(),
        out.image_results.len()
    );

    out.raw = raw;
    Ok(out)
}
