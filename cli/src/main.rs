//! omniserp command-line client
//!
//! ```text
//! omniserp search -q "rust async" --kind news --normalized
//! omniserp -e serpapi search -q "coffee" --kind places --location "Austin, Texas"
//! omniserp scrape https://example.com
//! omniserp engines
//! ```

use anyhow::Result;
use clap::Parser;

mod args;
mod commands;

use args::Cli;
use omniserp::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    mcp_common::init_tracing_with_level("omniserp_cli", cli.log_level())?;

    let config = Config::load()?;
    let client = commands::build_client(&config, cli.engine.as_deref())?;

    commands::run(&client, cli.command).await
}
