//! Dashboard - In-memory views over loaded videos and comments
//!
//! Responsibilities:
//! - Load both collections once, tolerating partial failure
//! - Join comments to videos and derive last-comment dates
//! - Aggregate comment counts per author
//! - Sort video and comment tables with direction toggling
//! - Build display-ready view models for each dashboard view

pub mod authors;
pub mod config;
pub mod dataset;
pub mod join;
pub mod loader;
pub mod placeholder;
pub mod sort;
pub mod state;
pub mod views;

pub use authors::{aggregate_authors, AuthorStat};
pub use config::Config;
pub use dataset::Dataset;
pub use join::{comments_for_video, last_comment_date, video_rows, VideoRow};
pub use loader::{load_dataset, DataOrigin, LoadReport, SourceOutcome, SourceReport};
pub use sort::{CommentColumn, Direction, VideoColumn};
pub use state::{AppState, SortState, View};
