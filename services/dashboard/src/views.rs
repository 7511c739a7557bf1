//! Display-ready view models. Everything here is already formatted; a
//! renderer only has to place the strings.

use crate::authors::aggregate_authors;
use crate::dataset::Dataset;
use crate::join::{comments_for_video, video_rows};
use crate::sort::{sort_comments, sort_videos, CommentColumn, VideoColumn};
use crate::state::SortState;
use parser::temporal::{format_date, format_date_time, format_duration, EMPTY_DISPLAY};
use serde::Serialize;

// ============================================================================
// View types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHeader {
    pub key: &'static str,
    pub label: &'static str,
    pub indicator: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRowView {
    pub id: i64,
    pub thumbnail: String,
    pub title: String,
    pub date: String,
    pub duration: String,
    pub view_count: String,
    pub like_count: String,
    pub comment_count: String,
    pub last_comment_date: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideosView {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<VideoRowView>,
}

/// Header block shown above a video's comments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: i64,
    pub title: String,
    pub thumbnail: String,
    pub date: String,
    pub view_count: String,
    pub like_count: String,
    /// Comments actually matched to the video, not the sheet's counter.
    pub comment_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRowView {
    pub id: String,
    pub author: String,
    pub date: String,
    pub text: String,
    pub like_count: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsView {
    pub video: Option<VideoSummary>,
    pub columns: Vec<ColumnHeader>,
    pub comments: Vec<CommentRowView>,
    /// Shown instead of the table when there is nothing to list.
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRow {
    pub rank: usize,
    pub author: String,
    pub count: usize,
    pub last_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorsView {
    pub total_comments: usize,
    pub author_count: usize,
    pub rows: Vec<AuthorRow>,
}

/// One entry of the video picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoOption {
    pub value: i64,
    pub label: String,
}

// ============================================================================
// Formatting
// ============================================================================

/// Integer with `,` thousands separators.
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Like [`format_count`], but zero reads as `-`.
pub fn count_or_dash(n: i64) -> String {
    if n == 0 {
        EMPTY_DISPLAY.to_string()
    } else {
        format_count(n)
    }
}

fn text_or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        EMPTY_DISPLAY.to_string()
    } else {
        s.to_string()
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn videos_view(data: &Dataset, sort: &SortState<VideoColumn>) -> VideosView {
    let mut rows = video_rows(data);
    if let Some(column) = sort.column {
        sort_videos(&mut rows, column, sort.direction);
    }

    let columns = VideoColumn::ALL
        .into_iter()
        .map(|c| ColumnHeader {
            key: c.key(),
            label: c.label(),
            indicator: sort.indicator(c),
        })
        .collect();

    let rows = rows
        .into_iter()
        .map(|row| {
            let v = row.video;
            VideoRowView {
                id: v.id,
                thumbnail: v.thumbnail,
                title: text_or_dash(&v.title),
                date: format_date(&v.date),
                duration: format_duration(&v.duration),
                view_count: count_or_dash(v.view_count),
                like_count: count_or_dash(v.like_count),
                comment_count: count_or_dash(v.comment_count),
                last_comment_date: row
                    .last_comment_date
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| EMPTY_DISPLAY.to_string()),
                url: v.url,
            }
        })
        .collect();

    VideosView { columns, rows }
}

pub fn comments_view(
    data: &Dataset,
    selected: Option<i64>,
    sort: &SortState<CommentColumn>,
) -> CommentsView {
    let columns = CommentColumn::ALL
        .into_iter()
        .map(|c| ColumnHeader {
            key: c.key(),
            label: c.label(),
            indicator: sort.indicator(c),
        })
        .collect();

    let empty = |message: String| CommentsView {
        video: None,
        columns: Vec::new(),
        comments: Vec::new(),
        message: Some(message),
    };

    let Some(video_id) = selected else {
        return empty("動画を選択してください。".to_string());
    };
    let Some(video) = data.video(video_id) else {
        return empty("動画が見つかりません。".to_string());
    };

    let mut matched = comments_for_video(&data.comments, video_id);
    if let Some(column) = sort.column {
        sort_comments(&mut matched, column, sort.direction);
    }

    let summary = VideoSummary {
        id: video.id,
        title: video.title.clone(),
        thumbnail: video.thumbnail.clone(),
        date: format_date(&video.date),
        view_count: count_or_dash(video.view_count),
        like_count: count_or_dash(video.like_count),
        comment_count: matched.len(),
    };
    let message = matched.is_empty().then(|| {
        format!(
            "「{} {}」にはコメントがありません。",
            video.id, video.title
        )
    });

    CommentsView {
        video: Some(summary),
        columns,
        comments: matched
            .into_iter()
            .map(|c| CommentRowView {
                id: c.id.clone(),
                author: c.author.clone(),
                date: format_date_time(&c.date),
                text: c.text.clone(),
                like_count: format_count(c.like_count),
            })
            .collect(),
        message,
    }
}

pub fn authors_view(data: &Dataset) -> AuthorsView {
    let stats = aggregate_authors(&data.comments);
    AuthorsView {
        total_comments: data.comments.len(),
        author_count: stats.len(),
        rows: stats
            .into_iter()
            .enumerate()
            .map(|(i, s)| AuthorRow {
                rank: i + 1,
                author: s.author,
                count: s.count,
                last_date: s
                    .last_date
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| EMPTY_DISPLAY.to_string()),
            })
            .collect(),
    }
}

/// Picker entries as `"{id}｜{title}"`, in dataset order.
pub fn video_options(data: &Dataset) -> Vec<VideoOption> {
    data.videos
        .iter()
        .map(|v| VideoOption {
            value: v.id,
            label: format!("{}｜{}", v.id, v.title),
        })
        .collect()
}
