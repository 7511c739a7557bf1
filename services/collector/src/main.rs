//! Collector CLI - Dumps the raw rows of one table source as JSON
//!
//! Usage:
//!   # Published sheet:
//!   cargo run --bin collector -- --source "https://docs.google.com/spreadsheets/d/<id>/gviz/tq?tqx=out:json&gid=0"
//!
//!   # Local export, first 5 rows only:
//!   cargo run --bin collector -- --source data/comments.csv --limit 5
//!
//!   # Workbook sheet:
//!   cargo run --bin collector -- --source exports/channel.xlsx#videos --headers

use anyhow::Result;
use clap::Parser;
use collector::{FetchConfig, Fetcher, TableSource};
use std::collections::BTreeSet;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "collector", about = "Reads a table source and prints its raw rows")]
struct Args {
    /// Table location: JSON table URL, CSV path/URL, or workbook path[#sheet]
    #[arg(long)]
    source: TableSource,

    /// Only print the first N rows
    #[arg(long)]
    limit: Option<usize>,

    /// Print the distinct column headers instead of rows
    #[arg(long, default_value = "false")]
    headers: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env).with_writer(std::io::stderr).init();

    let args = Args::parse();
    let config = FetchConfig::from_env();
    let fetcher = Fetcher::new(&config)?;

    info!(source = %args.source, format = args.source.format_name(), "collecting");
    let table = fetcher.load_table(&args.source).await?;

    if args.headers {
        let headers: BTreeSet<&str> = table.rows.iter().flat_map(|r| r.headers()).collect();
        println!("{}", serde_json::to_string_pretty(&headers)?);
        return Ok(());
    }

    let limit = args.limit.unwrap_or(table.rows.len());
    let rows: Vec<_> = table.rows.iter().take(limit).collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);

    info!(
        printed = rows.len(),
        total = table.rows.len(),
        fingerprint = %table.fingerprint,
        "done"
    );
    Ok(())
}
