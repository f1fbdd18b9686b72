//! Serper backend
//!
//! Implements the [`Engine`] trait against the Serper API: every operation is
//! a `POST` of a small JSON body to its own endpoint, authenticated with the
//! `X-API-KEY` header.
//! See: https://serper.dev

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::{http_client, read_response, SERPER};
use crate::config::{ProviderConfig, SearchConfig};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::types::{Operation, RawResult, ScrapeParams, SearchKind, SearchParams};

pub const DEFAULT_BASE_URL: &str = "https://google.serper.dev";
const VERSION: &str = "1.0.0";

/// Serper supports every operation, including lens
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
    Operation::Search(SearchKind::Lens),
    Operation::Search(SearchKind::Autocomplete),
    Operation::ScrapeWebpage,
];

pub struct SerperEngine {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerperEngine {
    pub fn new(config: &ProviderConfig, search: &SearchConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingApiKey("SERPER_API_KEY"))?;

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

    async fn post<T: Serialize + ?Sized>(&self, endpoint: &str, body: &T) -> Result<RawResult> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("Serper request: POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("X-API-KEY", &self.api_key)
            .json(body)
            .send()
            .await?;

        read_response(response).await
    }
}

fn endpoint(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Web => "/search",
        SearchKind::News => "/news",
        SearchKind::Images => "/images",
        SearchKind::Videos => "/videos",
        SearchKind::Places => "/places",
        SearchKind::Maps => "/maps",
        SearchKind::Reviews => "/reviews",
        SearchKind::Shopping => "/shopping",
        SearchKind::Scholar => "/scholar",
        SearchKind::Lens => "/lens",
        SearchKind::Autocomplete => "/autocomplete",
    }
}

/// Serper request body
#[derive(Debug, Serialize, PartialEq)]
struct SerperRequest<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hl: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gl: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num: Option<u32>,
}

impl<'a> SerperRequest<'a> {
    fn for_kind(kind: SearchKind, params: &'a SearchParams) -> Self {
        let mut request = Self {
            q: &params.query,
            location: params.location(),
            hl: params.language(),
            gl: params.country(),
            num: params.num_results,
        };

        // Some endpoints accept only a subset of the parameters
        match kind {
            SearchKind::Scholar => {
                request.location = None;
                request.gl = None;
            }
            SearchKind::Lens => request.location = None,
            SearchKind::Autocomplete => {
                request.location = None;
                request.num = None;
            }
            _ => {}
        }

        request
    }
}

#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
}

#[async_trait]
impl Engine for SerperEngine {
    fn name(&self) -> &str {
        SERPER
    }

    fn version(&self) -> &str {
        VERSION
    }

    fn supported_operations(&self) -> &[Operation] {
        OPERATIONS
    }

    async fn search(&self, kind: SearchKind, params: &SearchParams) -> Result<RawResult> {
        let body = SerperRequest::for_kind(kind, params);
        self.post(endpoint(kind), &body).await
    }

    async fn scrape(&self, params: &ScrapeParams) -> Result<RawResult> {
        url::Url::parse(&params.url)?;
        self.post("/scrape", &ScrapeRequest { url: &params.url })
            .await
    }
}
