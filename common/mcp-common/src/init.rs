//! Tracing setup and the `serve_stdio!` macro
//!
//! Logs always go to stderr: stdout carries the MCP protocol for servers
//! and JSON results for the CLI.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crate whose logs are enabled alongside the binary's own
const LIBRARY_TARGET: &str = "omniserp";

/// Initialize tracing at `info` for the given crate and the search library
///
/// `RUST_LOG` directives are applied first. Set `LOG_FORMAT=json` for
/// structured JSON output.
///
/// ```rust,ignore
/// mcp_common::init_tracing("omniserp_mcp")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    init_tracing_with_level(crate_name, "info")
}

/// Initialize tracing with an explicit level (`error`, `warn`, `info`, `debug`, `trace`)
pub fn init_tracing_with_level(crate_name: &str, level: &str) -> anyhow::Result<()> {
    let filter = build_filter(crate_name, level)?;

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn build_filter(crate_name: &str, level: &str) -> anyhow::Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env();
    for target in [crate_name, LIBRARY_TARGET] {
        filter = filter.add_directive(format!("{}={}", target, level).parse()?);
    }
    Ok(filter)
}

/// Generate a `main` that serves an MCP server over stdio
///
/// The server expression is evaluated inside the generated async `main`, so
/// it may use `?` and `.await`.
///
/// ```rust,ignore
/// mcp_common::serve_stdio!("omniserp_mcp", OmniserpMcpServer::from_env()?);
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($crate_name:expr, $server:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = $server;
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
}
