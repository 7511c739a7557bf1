use collector::TableSource;

/// Where the two collections come from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub videos_source: Option<TableSource>,
    pub comments_source: Option<TableSource>,
    /// Skip all sources and use the bundled sample data.
    pub use_local_data: bool,
}

impl Config {
    /// Reads `VIDEOS_SOURCE`/`COMMENTS_SOURCE`, falling back to
    /// `VIDEOS_CSV`/`COMMENTS_CSV`, and `USE_LOCAL_DATA`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = |primary: &str, fallback: &str| {
            lookup(primary)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| lookup(fallback))
                .and_then(|v| v.parse::<TableSource>().ok())
        };

        Self {
            videos_source: source("VIDEOS_SOURCE", "VIDEOS_CSV"),
            comments_source: source("COMMENTS_SOURCE", "COMMENTS_CSV"),
            use_local_data: lookup("USE_LOCAL_DATA")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    pub fn has_sources(&self) -> bool {
        self.videos_source.is_some() || self.comments_source.is_some()
    }
}
