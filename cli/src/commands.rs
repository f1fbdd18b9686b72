//! Subcommand handlers
//!
//! Results go to stdout as pretty JSON; everything else is logged to stderr.

use anyhow::{anyhow, Result};
use omniserp::{Client, Config, EngineInfo, Registry, ScrapeParams, SearchKind, SearchParams};
use serde::Serialize;

use crate::args::Commands;

#[derive(Debug, Serialize)]
struct EnginesOutput {
    active: String,
    engines: Vec<EngineInfo>,
}

/// Build the client, honoring an explicit `--engine`
pub fn build_client(config: &Config, engine: Option<&str>) -> Result<Client> {
    let registry = Registry::from_config(config);
    let client = match engine {
        Some(name) => Client::new(registry, &name.to_lowercase())?,
        None => Client::with_default(registry, &config.search.engine)?,
    };
    tracing::info!("Using engine: {} v{}", client.name(), client.version());
    Ok(client)
}

pub async fn run(client: &Client, command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            query,
            kind,
            location,
            language,
            country,
            num,
            normalized,
        } => {
            let params = SearchParams {
                query,
                location,
                language,
                country,
                num_results: num,
            };
            search(client, kind, &params, normalized).await
        }
        Commands::Scrape { url } => {
            let raw = client.scrape(&ScrapeParams::new(url)).await?;
            print_json(&raw.data)
        }
        Commands::Engines => print_json(&EnginesOutput {
            active: client.name().to_string(),
            engines: client.registry().info(),
        }),
    }
}

async fn search(
    client: &Client,
    kind: SearchKind,
    params: &SearchParams,
    normalized: bool,
) -> Result<()> {
    if !normalized {
        let raw = client.search_kind(kind, params).await?;
        return print_json(&raw.data);
    }

    let category = kind
        .category()
        .ok_or_else(|| anyhow!("--normalized is only available for web, news and images searches"))?;
    let result = client.search_normalized(category, params).await?;
    print_json(&result)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
