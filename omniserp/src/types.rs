//! Common request and response types shared by every engine
//!
//! These types are engine-agnostic: an engine translates [`SearchParams`]
//! into its own wire format and hands back a [`RawResult`] untouched.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Upper bound accepted for `num_results`
pub const MAX_NUM_RESULTS: u32 = 100;

/// Common search parameters across all engines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    #[schemars(description = "Search query")]
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Search location (e.g., 'Austin, Texas')")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Search language (e.g., 'en')")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Country code (e.g., 'us')")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Number of results (1-100, default: 10)")]
    pub num_results: Option<u32>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_num_results(mut self, num_results: u32) -> Self {
        self.num_results = Some(num_results);
        self
    }

    /// Reject an empty query or a result count outside `1..=100`
    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(Error::InvalidParams("query cannot be empty".into()));
        }
        if let Some(n) = self.num_results {
            if n == 0 || n > MAX_NUM_RESULTS {
                return Err(Error::InvalidParams(format!(
                    "num_results must be between 1 and {}, got {}",
                    MAX_NUM_RESULTS, n
                )));
            }
        }
        Ok(())
    }

    /// Optional string fields with empty values treated as absent
    pub(crate) fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub(crate) fn language(&self) -> Option<&str> {
        non_empty(&self.language)
    }

    pub(crate) fn country(&self) -> Option<&str> {
        non_empty(&self.country)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Parameters for scraping a single webpage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScrapeParams {
    #[schemars(description = "URL to scrape")]
    pub url: String,
}

impl ScrapeParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// An engine response exactly as it came off the wire
///
/// `data` is the decoded JSON document, `raw` the undecoded body. Neither is
/// modified after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResult {
    pub data: serde_json::Value,
    pub raw: Vec<u8>,
}

impl RawResult {
    pub fn new(data: serde_json::Value, raw: impl Into<Vec<u8>>) -> Self {
        Self {
            data,
            raw: raw.into(),
        }
    }

    /// Decode a response body into a result, keeping the original bytes
    pub fn from_bytes(raw: impl Into<Vec<u8>>) -> Result<Self> {
        let raw = raw.into();
        let data = serde_json::from_slice(&raw)?;
        Ok(Self { data, raw })
    }

    /// The undecoded body as text, replacing invalid UTF-8
    pub fn raw_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw)
    }
}

/// The kinds of search an engine may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Web,
    News,
    Images,
    Videos,
    Places,
    Maps,
    Reviews,
    Shopping,
    Scholar,
    Lens,
    Autocomplete,
}

impl SearchKind {
    pub fn all() -> &'static [SearchKind] {
        &[
            Self::Web,
            Self::News,
            Self::Images,
            Self::Videos,
            Self::Places,
            Self::Maps,
            Self::Reviews,
            Self::Shopping,
            Self::Scholar,
            Self::Lens,
            Self::Autocomplete,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::News => "news",
            Self::Images => "images",
            Self::Videos => "videos",
            Self::Places => "places",
            Self::Maps => "maps",
            Self::Reviews => "reviews",
            Self::Shopping => "shopping",
            Self::Scholar => "scholar",
            Self::Lens => "lens",
            Self::Autocomplete => "autocomplete",
        }
    }

    /// The normalization category for this kind, if it has one
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Web => Some(Category::Web),
            Self::News => Some(Category::News),
            Self::Images => Some(Category::Images),
            _ => None,
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::all().iter().map(|k| k.as_str()).collect();
                format!("unknown search kind '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Result categories the normalizer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    News,
    Images,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Web => "web",
            Self::News => "news",
            Self::Images => "images",
        })
    }
}

impl From<Category> for SearchKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Web => SearchKind::Web,
            Category::News => SearchKind::News,
            Category::Images => SearchKind::Images,
        }
    }
}

/// A named operation an engine does or does not support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Search(SearchKind),
    ScrapeWebpage,
}

impl Operation {
    /// Every operation, in tool listing order
    pub fn all() -> Vec<Operation> {
        SearchKind::all()
            .iter()
            .copied()
            .map(Operation::Search)
            .chain(std::iter::once(Operation::ScrapeWebpage))
            .collect()
    }

    /// The tool name under which this operation is exposed
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::Search(SearchKind::Web) => "google_search",
            Self::Search(SearchKind::News) => "google_search_news",
            Self::Search(SearchKind::Images) => "google_search_images",
            Self::Search(SearchKind::Videos) => "google_search_videos",
            Self::Search(SearchKind::Places) => "google_search_places",
            Self::Search(SearchKind::Maps) => "google_search_maps",
            Self::Search(SearchKind::Reviews) => "google_search_reviews",
            Self::Search(SearchKind::Shopping) => "google_search_shopping",
            Self::Search(SearchKind::Scholar) => "google_search_scholar",
            Self::Search(SearchKind::Lens) => "google_search_lens",
            Self::Search(SearchKind::Autocomplete) => "google_search_autocomplete",
            Self::ScrapeWebpage => "webpage_scrape",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|op| op.tool_name() == s)
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}

impl From<SearchKind> for Operation {
    fn from(kind: SearchKind) -> Self {
        Operation::Search(kind)
    }
}
