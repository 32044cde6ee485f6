//! # Hacker News Search Live Data Test
//!
//! Runs one title search against the real Algolia endpoint through
//! lib_hnsearch and prints what came back.

use clap::Parser;
use lib_hnsearch::news::hackernews::searchnews::search_news;
use lib_hnsearch::{NewsSearchClient, SearchOptions};

#[derive(Parser, Debug)]
#[command(about = "Live smoke test for the Hacker News search client")]
struct Args {
    /// Phrase to search for.
    #[arg(default_value = "rust")]
    query: String,

    /// Request timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("[*] Searching Hacker News for {:?} ...", args.query);

    // Structured path first, so a failure shows its kind.
    let options = SearchOptions {
        timeout_ms: args.timeout_ms,
        ..SearchOptions::default()
    };
    let client = NewsSearchClient::new(&options)?;
    match client.search_stories(&args.query).await {
        Ok(page) => {
            println!("\n[SUCCESS] {} hits on this page, {} total", page.hits.len(), page.nb_hits);
            println!("-----------------------------------------------");
            for hit in page.hits.iter().take(10) {
                println!("{:>5}  {}", hit.points.unwrap_or(0), hit.title.as_deref().unwrap_or("(untitled)"));
            }
            println!("-----------------------------------------------");
        }
        Err(e) => {
            eprintln!("\n[ERROR] Search failed ({:?}):", e.kind());
            eprintln!(">>> {}", e);
            std::process::exit(1);
        }
    }

    // Same search through the process-wide default client.
    match search_news(&args.query).await {
        Some(body) => println!("[INFO] default client returned {} bytes", body.to_string().len()),
        None => {
            eprintln!("[ERROR] default client returned no result");
            std::process::exit(1);
        }
    }

    Ok(())
}
