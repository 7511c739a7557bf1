//! Dashboard CLI - Loads the configured sources and prints one view as JSON
//!
//! Usage:
//!   # Video table sorted by views, most viewed first:
//!   cargo run --bin dashboard -- videos --sort viewCount --desc
//!
//!   # Comments of video #13, newest first:
//!   cargo run --bin dashboard -- comments --video 13 --sort date --desc
//!
//!   # Author ranking from local exports:
//!   cargo run --bin dashboard -- --videos data/videos.csv --comments data/comments.csv authors

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use collector::{FetchConfig, TableSource};
use dashboard::{
    load_dataset, AppState, CommentColumn, Config, Direction, SortState, VideoColumn, View,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "dashboard", about = "Video and comment dashboard views")]
struct Args {
    /// Videos table location (overrides VIDEOS_SOURCE)
    #[arg(long, global = true)]
    videos: Option<TableSource>,

    /// Comments table location (overrides COMMENTS_SOURCE)
    #[arg(long, global = true)]
    comments: Option<TableSource>,

    /// Use the bundled sample data instead of any source
    #[arg(long, global = true, default_value = "false")]
    local: bool,

    /// Also print the load report to stderr
    #[arg(long, global = true, default_value = "false")]
    report: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Video table
    Videos {
        /// Column to sort by
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending
        #[arg(long, default_value = "false")]
        desc: bool,
    },
    /// Comments of one video
    Comments {
        /// Video number
        #[arg(long)]
        video: Option<i64>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long, default_value = "false")]
        desc: bool,
    },
    /// Comment counts per author
    Authors,
    /// Video picker entries
    Options,
}

fn direction(desc: bool) -> Direction {
    if desc {
        Direction::Desc
    } else {
        Direction::Asc
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env).with_writer(std::io::stderr).init();

    let args = Args::parse();

    let mut config = Config::from_env();
    if args.videos.is_some() {
        config.videos_source = args.videos;
    }
    if args.comments.is_some() {
        config.comments_source = args.comments;
    }
    config.use_local_data |= args.local;

    let (data, report) = load_dataset(&config, &FetchConfig::from_env()).await;
    info!(origin = ?report.origin, videos = data.videos.len(), comments = data.comments.len(), "loaded");
    if args.report {
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    let mut state = AppState::new(Arc::new(data));

    let output = match args.command.unwrap_or(Command::Videos {
        sort: None,
        desc: false,
    }) {
        Command::Videos { sort, desc } => {
            state.switch_view(View::Videos);
            if let Some(name) = sort {
                let column: VideoColumn = name.parse().map_err(|e: String| anyhow!(e))?;
                state.video_sort = SortState::new(column, direction(desc));
            }
            serde_json::to_string_pretty(&state.videos_view())?
        }
        Command::Comments { video, sort, desc } => {
            if let Some(name) = sort {
                let column: CommentColumn = name.parse().map_err(|e: String| anyhow!(e))?;
                state.comment_sort = SortState::new(column, direction(desc));
            }
            match video {
                Some(id) => state.open_comments(id),
                None => state.switch_view(View::Comments),
            }
            serde_json::to_string_pretty(&state.comments_view())?
        }
        Command::Authors => {
            state.switch_view(View::Authors);
            serde_json::to_string_pretty(&state.authors_view())?
        }
        Command::Options => serde_json::to_string_pretty(&state.video_options())?,
    };

    println!("{}", output);
    Ok(())
}
