//! Raw sheet rows to canonical videos and comments.
//!
//! Normalization never fails: rows that cannot become a valid record are
//! dropped and counted, malformed numbers read as zero and dates stay as the
//! exported text.

use crate::fields::{
    comment, has_any, is_header_echo, leading_digits, parse_count, resolve, resolve_text, video,
    Field,
};
use crate::models::{Comment, Video};
use collector::RawRow;
use tracing::{debug, info};

/// What happened to the input rows of one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub input_rows: usize,
    pub header_echo: usize,
    pub blank: usize,
    pub invalid: usize,
    pub records: usize,
}

/// Rows left after dropping a header-echo first row and blank rows.
fn data_rows<'a>(
    rows: &'a [RawRow],
    all: &[Field],
    identifying: &[Field],
    stats: &mut NormalizeStats,
) -> Vec<&'a RawRow> {
    stats.input_rows = rows.len();
    rows.iter()
        .enumerate()
        .filter(|(idx, row)| {
            if *idx == 0 && is_header_echo(row, all) {
                debug!("skipping header row echoed as data");
                stats.header_echo += 1;
                return false;
            }
            if !has_any(row, identifying) {
                stats.blank += 1;
                return false;
            }
            true
        })
        .map(|(_, row)| row)
        .collect()
}

/// Convert video sheet rows. A video needs a positive integer id and a title.
pub fn convert_videos(rows: &[RawRow]) -> (Vec<Video>, NormalizeStats) {
    let mut stats = NormalizeStats::default();
    let candidates = data_rows(rows, video::ALL, video::IDENTIFYING, &mut stats);

    let mut videos = Vec::with_capacity(candidates.len());
    for row in candidates {
        let id = resolve(row, &video::ID).and_then(leading_digits).unwrap_or(0);
        let title = resolve_text(row, &video::TITLE);

        if id <= 0 || title.is_empty() {
            debug!(id, title = %title, "dropping invalid video row");
            stats.invalid += 1;
            continue;
        }

        videos.push(Video {
            id,
            title,
            thumbnail: resolve_text(row, &video::THUMBNAIL),
            date: resolve_text(row, &video::DATE),
            view_count: parse_count(&resolve_text(row, &video::VIEW_COUNT)),
            like_count: parse_count(&resolve_text(row, &video::LIKE_COUNT)),
            comment_count: parse_count(&resolve_text(row, &video::COMMENT_COUNT)),
            duration: resolve_text(row, &video::DURATION),
            url: resolve_text(row, &video::URL),
            description: resolve_text(row, &video::DESCRIPTION),
        });
    }

    stats.records = videos.len();
    info!(
        rows = stats.input_rows,
        videos = stats.records,
        blank = stats.blank,
        invalid = stats.invalid,
        "videos normalized"
    );
    (videos, stats)
}

/// Convert comment sheet rows. A comment needs an author and a text. One
/// without an id of its own is numbered by its position among the data rows,
/// so it is kept even when it carries only an external video id.
pub fn convert_comments(rows: &[RawRow]) -> (Vec<Comment>, NormalizeStats) {
    let mut stats = NormalizeStats::default();
    let candidates = data_rows(rows, comment::ALL, comment::IDENTIFYING, &mut stats);

    let mut comments = Vec::with_capacity(candidates.len());
    for (position, row) in candidates.into_iter().enumerate() {
        let video_no = resolve(row, &comment::VIDEO_NO)
            .and_then(leading_digits)
            .unwrap_or(0);
        let id = resolve(row, &comment::ID)
            .map(str::to_string)
            .unwrap_or_else(|| (position + 1).to_string());
        let author = resolve_text(row, &comment::AUTHOR);
        let text = resolve_text(row, &comment::TEXT);

        if author.is_empty() || text.is_empty() {
            debug!(video_no, id = %id, "dropping invalid comment row");
            stats.invalid += 1;
            continue;
        }

        comments.push(Comment {
            id,
            video_no,
            video_id: resolve_text(row, &comment::VIDEO_ID),
            title: resolve_text(row, &comment::TITLE),
            author,
            date: resolve_text(row, &comment::DATE),
            text,
            like_count: parse_count(&resolve_text(row, &comment::LIKE_COUNT)),
        });
    }

    stats.records = comments.len();
    info!(
        rows = stats.input_rows,
        comments = stats.records,
        blank = stats.blank,
        invalid = stats.invalid,
        "comments normalized"
    );
    (comments, stats)
}
