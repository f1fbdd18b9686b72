//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use omniserp::SearchKind;

#[derive(Parser, Debug)]
#[command(name = "omniserp")]
#[command(about = "Google search through Serper or SerpAPI", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Engine to use (default: SEARCH_ENGINE, the config file, or serper)
    #[arg(short, long, global = true)]
    pub engine: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a search and print the engine response as JSON
    Search {
        /// Search query
        #[arg(short, long)]
        query: String,

        /// Kind of search (web, news, images, videos, places, maps, reviews,
        /// shopping, scholar, lens, autocomplete)
        #[arg(short, long, default_value = "web")]
        kind: SearchKind,

        /// Search location (e.g. "Austin, Texas")
        #[arg(long)]
        location: Option<String>,

        /// Language code (e.g. "en")
        #[arg(long)]
        language: Option<String>,

        /// Country code (e.g. "us")
        #[arg(long)]
        country: Option<String>,

        /// Number of results (1-100)
        #[arg(short, long)]
        num: Option<u32>,

        /// Print the engine-independent normalized result (web, news, images)
        #[arg(long)]
        normalized: bool,
    },
    /// Fetch a webpage through the active engine
    Scrape {
        /// URL to scrape
        url: String,
    },
    /// List registered engines and the tools they support
    Engines,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["omniserp", "search", "-q", "rust"]).unwrap();
        assert_eq!(cli.engine, None);
        assert_eq!(cli.log_level(), "warn");
        match cli.command {
            Commands::Search {
                query,
                kind,
                num,
                normalized,
                ..
            } => {
                assert_eq!(query, "rust");
                assert_eq!(kind, SearchKind::Web);
                assert_eq!(num, None);
                assert!(!normalized);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_search_all_flags() {
        let cli = Cli::try_parse_from([
            "omniserp",
            "-vv",
            "search",
            "--query",
            "coffee",
            "--kind",
            "News",
            "--location",
            "Berlin",
            "--language",
            "de",
            "--country",
            "de",
            "-n",
            "5",
            "--normalized",
            "-e",
            "serpapi",
        ])
        .unwrap();

        assert_eq!(cli.engine.as_deref(), Some("serpapi"));
        assert_eq!(cli.log_level(), "debug");
        match cli.command {
            Commands::Search {
                kind,
                location,
                num,
                normalized,
                ..
            } => {
                assert_eq!(kind, SearchKind::News);
                assert_eq!(location.as_deref(), Some("Berlin"));
                assert_eq!(num, Some(5));
                assert!(normalized);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = Cli::try_parse_from(["omniserp", "search", "-q", "x", "--kind", "bogus"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_scrape_and_engines() {
        let cli = Cli::try_parse_from(["omniserp", "scrape", "https://example.com"]).unwrap();
        assert!(matches!(cli.command, Commands::Scrape { url } if url == "https://example.com"));

        let cli = Cli::try_parse_from(["omniserp", "engines", "-vvvv"]).unwrap();
        assert!(matches!(cli.command, Commands::Engines));
        assert_eq!(cli.log_level(), "trace");
    }
}
