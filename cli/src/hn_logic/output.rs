use anyhow::{Context, Result};
use clap::ValueEnum;
use lib_hnsearch::{Hit, SearchResponse};
use serde_json::Value;

/// How search results are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The raw response body, minified.
    Json,
    /// The raw response body, pretty-printed.
    Pretty,
    /// One entry per story: points, title, link, author and date.
    Titles,
}

pub fn render(body: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(body)?),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(body)?),
        OutputFormat::Titles => {
            let page: SearchResponse = serde_json::from_value(body.clone())
                .context("Response does not look like a search result page")?;
            Ok(render_titles(&page))
        }
    }
}

fn render_titles(page: &SearchResponse) -> String {
    let mut out = String::new();
    for hit in &page.hits {
        out.push_str(&render_hit(hit));
        out.push('\n');
    }
    out.push_str(&format!(
        "{} of {} matching stories",
        page.hits.len(),
        page.nb_hits
    ));
    out
}

fn render_hit(hit: &Hit) -> String {
    let points = hit.points.map_or_else(|| "-".to_string(), |p| p.to_string());
    let title = hit.title.as_deref().unwrap_or("(untitled)");
    let author = hit.author.as_deref().unwrap_or("unknown");
    let date = hit
        .created()
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    format!(
        "{points:>5}  {title}\n       {}\n       by {author} {date}",
        hit.link()
    )
}
