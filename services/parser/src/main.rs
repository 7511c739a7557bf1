//! Parser CLI - Normalizes one table source and prints canonical records
//!
//! Usage:
//!   # Videos from a published sheet:
//!   cargo run --bin parser -- --kind videos --source "https://docs.google.com/spreadsheets/d/<id>/gviz/tq?tqx=out:json&gid=0"
//!
//!   # Comments from a local export:
//!   cargo run --bin parser -- --kind comments --source data/comments.csv

use anyhow::Result;
use clap::{Parser, ValueEnum};
use collector::{FetchConfig, Fetcher, TableSource};
use parser::{convert_comments, convert_videos, NormalizeStats};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Videos,
    Comments,
}

#[derive(Parser, Debug)]
#[command(name = "parser", about = "Normalizes a table source into videos or comments")]
struct Args {
    /// Which collection the source holds
    #[arg(long, value_enum)]
    kind: Kind,

    /// Table location: JSON table URL, CSV path/URL, or workbook path[#sheet]
    #[arg(long)]
    source: TableSource,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env).with_writer(std::io::stderr).init();

    let args = Args::parse();
    let fetcher = Fetcher::new(&FetchConfig::from_env())?;
    let table = fetcher.load_table(&args.source).await?;

    let stats: NormalizeStats = match args.kind {
        Kind::Videos => {
            let (videos, stats) = convert_videos(&table.rows);
            println!("{}", serde_json::to_string_pretty(&videos)?);
            stats
        }
        Kind::Comments => {
            let (comments, stats) = convert_comments(&table.rows);
            println!("{}", serde_json::to_string_pretty(&comments)?);
            stats
        }
    };

    info!(
        kind = ?args.kind,
        rows = stats.input_rows,
        records = stats.records,
        dropped = stats.header_echo + stats.blank + stats.invalid,
        fingerprint = %table.fingerprint,
        "parsed"
    );
    Ok(())
}
