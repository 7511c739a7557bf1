//! Column sorting for the video and comment tables.
//!
//! Sorts are stable, so rows that compare equal keep their input order in
//! both directions. Descending reverses the comparator, not the result.

use crate::join::VideoRow;
use parser::temporal::{date_sort_value, EPOCH_MIN};
use parser::Comment;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VideoColumn {
    Id,
    Title,
    Date,
    Duration,
    ViewCount,
    LikeCount,
    CommentCount,
    LastCommentDate,
}

impl VideoColumn {
    pub const ALL: [VideoColumn; 8] = [
        VideoColumn::Id,
        VideoColumn::Title,
        VideoColumn::Date,
        VideoColumn::Duration,
        VideoColumn::ViewCount,
        VideoColumn::LikeCount,
        VideoColumn::CommentCount,
        VideoColumn::LastCommentDate,
    ];

    pub fn key(self) -> &'static str {
        match self {
            VideoColumn::Id => "id",
            VideoColumn::Title => "title",
            VideoColumn::Date => "date",
            VideoColumn::Duration => "duration",
            VideoColumn::ViewCount => "viewCount",
            VideoColumn::LikeCount => "likeCount",
            VideoColumn::CommentCount => "commentCount",
            VideoColumn::LastCommentDate => "lastCommentDate",
        }
    }

    /// Header text shown for the column.
    pub fn label(self) -> &'static str {
        match self {
            VideoColumn::Id => "#",
            VideoColumn::Title => "タイトル",
            VideoColumn::Date => "投稿日",
            VideoColumn::Duration => "動画尺",
            VideoColumn::ViewCount => "再生数",
            VideoColumn::LikeCount => "高評価数",
            VideoColumn::CommentCount => "コメント数",
            VideoColumn::LastCommentDate => "最終コメント日",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommentColumn {
    Date,
    LikeCount,
    Author,
}

impl CommentColumn {
    pub const ALL: [CommentColumn; 3] = [
        CommentColumn::Date,
        CommentColumn::LikeCount,
        CommentColumn::Author,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CommentColumn::Date => "date",
            CommentColumn::LikeCount => "likeCount",
            CommentColumn::Author => "author",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CommentColumn::Date => "投稿日時",
            CommentColumn::LikeCount => "高評価数",
            CommentColumn::Author => "投稿者",
        }
    }
}

macro_rules! column_from_str {
    ($column:ty, $kind:literal) => {
        impl FromStr for $column {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                <$column>::ALL
                    .into_iter()
                    .find(|c| c.key().eq_ignore_ascii_case(s))
                    .ok_or_else(|| format!("unknown {} column: {}", $kind, s))
            }
        }

        impl fmt::Display for $column {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

column_from_str!(VideoColumn, "video");
column_from_str!(CommentColumn, "comment");

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn last_comment_value(row: &VideoRow) -> i64 {
    row.last_comment_date
        .as_deref()
        .map(date_sort_value)
        .unwrap_or(EPOCH_MIN)
}

pub fn compare_videos(a: &VideoRow, b: &VideoRow, column: VideoColumn) -> Ordering {
    let (va, vb) = (&a.video, &b.video);
    match column {
        VideoColumn::Id => va.id.cmp(&vb.id),
        VideoColumn::Title => compare_text(&va.title, &vb.title),
        VideoColumn::Date => va.date_sort_value().cmp(&vb.date_sort_value()),
        VideoColumn::Duration => va.duration_seconds().cmp(&vb.duration_seconds()),
        VideoColumn::ViewCount => va.view_count.cmp(&vb.view_count),
        VideoColumn::LikeCount => va.like_count.cmp(&vb.like_count),
        VideoColumn::CommentCount => va.comment_count.cmp(&vb.comment_count),
        VideoColumn::LastCommentDate => last_comment_value(a).cmp(&last_comment_value(b)),
    }
}

pub fn compare_comments(a: &Comment, b: &Comment, column: CommentColumn) -> Ordering {
    match column {
        CommentColumn::Date => a.date_sort_value().cmp(&b.date_sort_value()),
        CommentColumn::LikeCount => a.like_count.cmp(&b.like_count),
        CommentColumn::Author => compare_text(&a.author, &b.author),
    }
}

pub fn sort_videos(rows: &mut [VideoRow], column: VideoColumn, direction: Direction) {
    rows.sort_by(|a, b| direction.apply(compare_videos(a, b, column)));
}

pub fn sort_comments(comments: &mut [&Comment], column: CommentColumn, direction: Direction) {
    comments.sort_by(|a, b| direction.apply(compare_comments(a, b, column)));
}

/// Sort by a column given by name. Unknown names leave the order unchanged.
pub fn sort_videos_by_name(rows: &mut [VideoRow], column: &str, direction: Direction) {
    match column.parse::<VideoColumn>() {
        Ok(column) => sort_videos(rows, column, direction),
        Err(e) => debug!("{}; order unchanged", e),
    }
}

pub fn sort_comments_by_name(comments: &mut [&Comment], column: &str, direction: Direction) {
    match column.parse::<CommentColumn>() {
        Ok(column) => sort_comments(comments, column, direction),
        Err(e) => debug!("{}; order unchanged", e),
    }
}
