//! SerpAPI backend
//!
//! Implements the [`Engine`] trait against SerpAPI. All searches go to a
//! single `GET /search.json` endpoint; the `engine` query parameter picks the
//! Google vertical and `api_key` authenticates.
//! See: https://serpapi.com/search-api

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::{http_client, read_response, SERPAPI};
use crate::config::{ProviderConfig, SearchConfig};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::types::{Operation, RawResult, ScrapeParams, SearchKind, SearchParams};

pub const DEFAULT_BASE_URL: &str = "https://serpapi.com";
const SEARCH_PATH: &str = "/search.json";
const VERSION: &str = "1.0.0";
const SCRAPE_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// SerpAPI has no lens vertical
const OPERATIONS: &[Operation] = &[
    Operation::Search(SearchKind::Web),
    Operation::Search(SearchKind::News),
    Operation::Search(SearchKind::Images),
    Operation::Search(SearchKind::Videos),
    Operation::Search(SearchKind::Places),
    Operation::Search(SearchKind::Maps),
    Operation::Search(SearchKind::Reviews),
    Operation::Search(SearchKind::Shopping),
    Operation::Search(SearchKind::Scholar),
    Operation::Search(SearchKind::Autocomplete),
    Operation::ScrapeWebpage,
];

pub struct SerpApiEngine {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiEngine {
    pub fn new(config: &ProviderConfig, search: &SearchConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingApiKey("SERPAPI_API_KEY"))?;

        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: http_client(search.timeout_seconds)?,
            api_key,
            base_url,
        })
    }

    async fn get(&self, params: Vec<(&'static str, String)>) -> Result<RawResult> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        tracing::debug!("SerpAPI request: GET {} (engine: {:?})", url, engine_of(&params));

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(&params)
            .send()
            .await?;

        read_response(response).await
    }
}

fn engine_of<'a>(params: &'a [(&'static str, String)]) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| *k == "engine")
        .map(|(_, v)| v.as_str())
}

/// Build the query string for a search, or `None` when SerpAPI lacks the vertical
fn query_params(kind: SearchKind, params: &SearchParams) -> Option<Vec<(&'static str, String)>> {
    let engine = match kind {
        SearchKind::Web | SearchKind::Reviews => "google",
        SearchKind::News => "google_news",
        SearchKind::Images => "google_images",
        SearchKind::Videos => "google_videos",
        SearchKind::Places | SearchKind::Maps => "google_maps",
        SearchKind::Shopping => "google_shopping",
        SearchKind::Scholar => "google_scholar",
        SearchKind::Autocomplete => "google_autocomplete",
        SearchKind::Lens => return None,
    };

    let query = match kind {
        SearchKind::Reviews => format!("{} reviews", params.query),
        _ => params.query.clone(),
    };

    let mut out = vec![("q", query), ("engine", engine.to_string())];

    let (location, country, num) = match kind {
        SearchKind::Scholar => (false, false, true),
        SearchKind::Autocomplete => (false, true, false),
        _ => (true, true, true),
    };

    if location {
        if let Some(loc) = params.location() {
            out.push(("location", loc.to_string()));
        }
    }
    if let Some(hl) = params.language() {
        out.push(("hl", hl.to_string()));
    }
    if country {
        if let Some(gl) = params.country() {
            out.push(("gl", gl.to_string()));
        }
    }
    if num {
        if let Some(n) = params.num_results {
            out.push(("num", n.to_string()));
        }
    }
    if kind == SearchKind::Places {
        out.push(("type", "search".to_string()));
    }

    Some(out)
}

#[async_trait]
impl Engine for SerpApiEngine {
    fn name(&self) -> &str {
        SERPAPI
    }

    fn version(&self) -> &str {
        VERSION
    }

    fn supported_operations(&self) -> &[Operation] {
        OPERATIONS
    }

    async fn search(&self, kind: SearchKind, params: &SearchParams) -> Result<RawResult> {
        let query = query_params(kind, params).ok_or_else(|| Error::OperationNotSupported {
            operation: Operation::Search(kind).tool_name().to_string(),
            engine: SERPAPI.to_string(),
            supported: self.supported_tools(),
        })?;
        self.get(query).await
    }

    /// SerpAPI has no scraping endpoint, so the page is fetched directly
    async fn scrape(&self, params: &ScrapeParams) -> Result<RawResult> {
        let url = url::Url::parse(&params.url)?;
        tracing::debug!("SerpAPI scrape: GET {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, SCRAPE_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_string())
                    .or_default()
                    .push(value.to_string());
            }
        }

        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body: format!("scraping error: status {}", status.as_u16()),
            });
        }

        let data = json!({
            "url": params.url,
            "content": String::from_utf8_lossy(&body),
            "status": status.as_u16(),
            "headers": headers,
        });

        Ok(RawResult::new(data, body.to_vec()))
    }
}
