use anyhow::{Context, Result};
use clap::Parser;
use lib_hnsearch::loggers::loggerlocal::setup_logging;
use lib_hnsearch::NewsSearchClient;

mod hn_logic;
use hn_logic::config::{self, Config};
use hn_logic::output::{self, OutputFormat};

const APP_NAME: &str = "hn-search";

/// Search Hacker News story titles for an exact phrase, newest first.
#[derive(Parser, Debug)]
#[command(
    name = "hn-search",
    version,
    about,
    long_about = "Searches Hacker News story titles for an exact phrase through the public Algolia API and prints up to 100 of the most recent matches. Ask HN, Show HN, polls and comments are excluded."
)]
struct Cli {
    /// Phrase to look for in story titles.
    query: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Titles)]
    format: OutputFormat,

    #[command(flatten)]
    config: Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match config::load_config(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:#}. Falling back to defaults and environment/CLI values.");
            config::default_config().merge(cli.config)
        }
    };

    setup_logging(APP_NAME, config.log_dir.as_deref(), config.log_level())
        .context("Failed to initialize logging")?;
    log::debug!("effective configuration: {config:?}");

    let client = NewsSearchClient::new(&config.search_options())
        .context("Failed to build the search client")?;

    match client.search_news(&cli.query).await {
        Some(body) => {
            println!("{}", output::render(&body, cli.format)?);
            Ok(())
        }
        None => {
            eprintln!("Search for {:?} failed; see the log for details.", cli.query);
            std::process::exit(1);
        }
    }
}
