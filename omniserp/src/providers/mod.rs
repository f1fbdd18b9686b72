//! Search engine implementations
//!
//! Two engines are provided:
//! - [`serper::SerperEngine`]: POST with JSON body, `X-API-KEY` header auth
//! - [`serpapi::SerpApiEngine`]: GET with query parameters, `api_key` auth

use std::time::Duration;

use reqwest::Client;

use crate::error::{Error, Result};
use crate::types::RawResult;

pub mod serpapi;
pub mod serper;

/// Registry name of the Serper engine
pub const SERPER: &str = "serper";
/// Registry name of the SerpAPI engine
pub const SERPAPI: &str = "serpapi";

const USER_AGENT: &str = concat!("omniserp/", env!("CARGO_PKG_VERSION"));

pub(crate) fn http_client(timeout_seconds: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Turn an engine response into a [`RawResult`], failing on non-2xx status
pub(crate) async fn read_response(response: reqwest::Response) -> Result<RawResult> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    RawResult::from_bytes(body.to_vec())
}
