//! Loads both collections once at startup.
//!
//! A failing source never takes the other one down: it is logged, reported
//! and left empty. Only when nothing could be loaded at all does the bundled
//! placeholder dataset stand in.

use crate::config::Config;
use crate::dataset::Dataset;
use crate::placeholder::placeholder_dataset;
use collector::{FetchConfig, Fetcher, RawRow, TableSource};
use parser::{convert_comments, convert_videos, NormalizeStats};
use serde::Serialize;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Sources,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SourceOutcome {
    Loaded {
        rows: usize,
        records: usize,
        fingerprint: String,
    },
    Failed {
        error: String,
    },
    NotConfigured,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceReport {
    pub collection: &'static str,
    pub location: Option<String>,
    pub outcome: SourceOutcome,
}

impl SourceReport {
    fn not_configured(collection: &'static str) -> Self {
        Self {
            collection,
            location: None,
            outcome: SourceOutcome::NotConfigured,
        }
    }

    pub fn failed(&self) -> bool {
        matches!(self.outcome, SourceOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub origin: DataOrigin,
    pub videos: SourceReport,
    pub comments: SourceReport,
}

type Convert<T> = fn(&[RawRow]) -> (Vec<T>, NormalizeStats);

async fn load_collection<T>(
    fetcher: &Fetcher,
    collection: &'static str,
    source: Option<&TableSource>,
    convert: Convert<T>,
) -> (Vec<T>, SourceReport) {
    let Some(source) = source else {
        return (Vec::new(), SourceReport::not_configured(collection));
    };
    let location = Some(source.to_string());

    match fetcher.load_table(source).await {
        Ok(table) => {
            let (records, stats) = convert(&table.rows);
            info!(
                collection,
                source = %source,
                rows = stats.input_rows,
                records = records.len(),
                "collection loaded"
            );
            let outcome = SourceOutcome::Loaded {
                rows: stats.input_rows,
                records: records.len(),
                fingerprint: table.fingerprint,
            };
            (records, SourceReport { collection, location, outcome })
        }
        Err(e) => {
            let message = format!("{:#}", e);
            error!(collection, source = %source, error = %message, "failed to load collection");
            let outcome = SourceOutcome::Failed { error: message };
            (Vec::new(), SourceReport { collection, location, outcome })
        }
    }
}

fn placeholder() -> Dataset {
    placeholder_dataset().unwrap_or_else(|e| {
        error!(error = %format!("{:#}", e), "placeholder dataset unavailable");
        Dataset::default()
    })
}

/// Load videos and comments as configured. Never fails; see [`LoadReport`]
/// for what actually happened.
pub async fn load_dataset(config: &Config, fetch: &FetchConfig) -> (Dataset, LoadReport) {
    let unconfigured = || LoadReport {
        origin: DataOrigin::Placeholder,
        videos: SourceReport::not_configured("videos"),
        comments: SourceReport::not_configured("comments"),
    };

    if config.use_local_data {
        info!("local data mode, using placeholder dataset");
        return (placeholder(), unconfigured());
    }
    if !config.has_sources() {
        warn!("no sources configured, using placeholder dataset");
        return (placeholder(), unconfigured());
    }

    let fetcher = match Fetcher::new(fetch) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!(error = %format!("{:#}", e), "cannot load sources, using placeholder dataset");
            return (placeholder(), unconfigured());
        }
    };

    let ((videos, videos_report), (comments, comments_report)) = tokio::join!(
        load_collection(
            &fetcher,
            "videos",
            config.videos_source.as_ref(),
            convert_videos
        ),
        load_collection(
            &fetcher,
            "comments",
            config.comments_source.as_ref(),
            convert_comments
        ),
    );

    let all_failed = [&videos_report, &comments_report]
        .into_iter()
        .filter(|r| r.outcome != SourceOutcome::NotConfigured)
        .all(SourceReport::failed);

    if all_failed {
        warn!("every configured source failed, using placeholder dataset");
        return (
            placeholder(),
            LoadReport {
                origin: DataOrigin::Placeholder,
                videos: videos_report,
                comments: comments_report,
            },
        );
    }

    info!(
        videos = videos.len(),
        comments = comments.len(),
        "dataset ready"
    );
    (
        Dataset::new(videos, comments),
        LoadReport {
            origin: DataOrigin::Sources,
            videos: videos_report,
            comments: comments_report,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> TableSource {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        TableSource::from_location(path.to_str().unwrap())
    }

    fn missing(dir: &TempDir, name: &str) -> TableSource {
        TableSource::from_location(dir.path().join(name).to_str().unwrap())
    }

    const VIDEOS: &str = "#,タイトル,再生数\n1,First,\"1,000\"\n2,Second,5\n";
    const COMMENTS: &str = "動画No,投稿者,投稿日時,コメント本文\n1,A,2024/01/15 10:30,hi\n7,B,2024/01/16 10:30,orphan\n";

    // -------------------------------------------------------------------------
    // SOURCE TESTS
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_loads_both_collections() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            videos_source: Some(write(&dir, "videos.csv", VIDEOS)),
            comments_source: Some(write(&dir, "comments.csv", COMMENTS)),
            use_local_data: false,
        };

        let (data, report) = load_dataset(&config, &FetchConfig::default()).await;

        assert_eq!(report.origin, DataOrigin::Sources);
        assert_eq!(data.videos.len(), 2);
        assert_eq!(data.videos[0].view_count, 1000);
        assert_eq!(data.comments.len(), 2);
        match &report.videos.outcome {
            SourceOutcome::Loaded { rows, records, fingerprint } => {
                assert_eq!(*rows, 2);
                assert_eq!(*records, 2);
                assert!(fingerprint.starts_with("sha256:"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_other_collection() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            videos_source: Some(write(&dir, "videos.csv", VIDEOS)),
            comments_source: Some(missing(&dir, "comments.csv")),
            use_local_data: false,
        };

        let (data, report) = load_dataset(&config, &FetchConfig::default()).await;

        assert_eq!(report.origin, DataOrigin::Sources);
        assert_eq!(data.videos.len(), 2);
        assert!(data.comments.is_empty());
        assert!(report.comments.failed());
        assert!(!report.videos.failed());
    }

    #[tokio::test]
    async fn test_single_configured_source() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            videos_source: None,
            comments_source: Some(write(&dir, "comments.csv", COMMENTS)),
            use_local_data: false,
        };

        let (data, report) = load_dataset(&config, &FetchConfig::default()).await;

        assert_eq!(report.origin, DataOrigin::Sources);
        assert!(data.videos.is_empty());
        assert_eq!(data.comments.len(), 2);
        assert_eq!(report.videos.outcome, SourceOutcome::NotConfigured);
    }

    // -------------------------------------------------------------------------
    // FALLBACK TESTS
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_total_failure_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            videos_source: Some(missing(&dir, "videos.csv")),
            comments_source: Some(missing(&dir, "comments.csv")),
            use_local_data: false,
        };

        let (data, report) = load_dataset(&config, &FetchConfig::default()).await;

        assert_eq!(report.origin, DataOrigin::Placeholder);
        assert!(report.videos.failed());
        assert!(report.comments.failed());
        assert_eq!(data.videos.len(), 3);
    }

    #[tokio::test]
    async fn test_local_data_mode_skips_sources() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            videos_source: Some(write(&dir, "videos.csv", VIDEOS)),
            comments_source: None,
            use_local_data: true,
        };

        let (data, report) = load_dataset(&config, &FetchConfig::default()).await;

        assert_eq!(report.origin, DataOrigin::Placeholder);
        assert_eq!(data.videos.len(), 3);
        assert_eq!(data.comments.len(), 8);
    }

    #[tokio::test]
    async fn test_no_sources_uses_placeholder() {
        let (data, report) = load_dataset(&Config::default(), &FetchConfig::default()).await;
        assert_eq!(report.origin, DataOrigin::Placeholder);
        assert!(!data.is_empty());
    }
}
