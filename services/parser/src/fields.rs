//! Canonical fields and the sheet headers they may be read from.
//!
//! Column names differ between exports (localized headers, camelCase API
//! names, older sheet layouts), so every canonical field carries an explicit
//! ordered list of candidate headers. [`resolve`] is the only place that walks
//! these lists.

use collector::RawRow;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("Invalid regex"));
static LEADING_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)").expect("Invalid regex"));

/// A canonical field and its candidate headers, most preferred first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub candidates: &'static [&'static str],
}

/// Video sheet columns.
pub mod video {
    use super::Field;

    pub const ID: Field = Field {
        name: "id",
        candidates: &["#", "id", "ID"],
    };
    pub const TITLE: Field = Field {
        name: "title",
        candidates: &["タイトル", "title"],
    };
    pub const THUMBNAIL: Field = Field {
        name: "thumbnail",
        candidates: &["サムネイル", "thumbnail", "画像URL"],
    };
    pub const DATE: Field = Field {
        name: "date",
        candidates: &["投稿日", "date", "日付"],
    };
    pub const VIEW_COUNT: Field = Field {
        name: "viewCount",
        candidates: &["再生数", "viewCount", "視聴回数"],
    };
    pub const LIKE_COUNT: Field = Field {
        name: "likeCount",
        candidates: &["高評価数", "likeCount"],
    };
    pub const COMMENT_COUNT: Field = Field {
        name: "commentCount",
        candidates: &["コメント数", "commentCount"],
    };
    pub const URL: Field = Field {
        name: "url",
        candidates: &["URL", "url"],
    };
    pub const DESCRIPTION: Field = Field {
        name: "description",
        candidates: &["概要文", "description"],
    };
    pub const DURATION: Field = Field {
        name: "duration",
        candidates: &["動画尺", "duration"],
    };

    pub const ALL: &[Field] = &[
        ID,
        TITLE,
        THUMBNAIL,
        DATE,
        VIEW_COUNT,
        LIKE_COUNT,
        COMMENT_COUNT,
        URL,
        DESCRIPTION,
        DURATION,
    ];

    /// A row with none of these populated is blank.
    pub const IDENTIFYING: &[Field] = &[ID, TITLE];
}

/// Comment sheet columns.
pub mod comment {
    use super::Field;

    pub const VIDEO_NO: Field = Field {
        name: "videoNo",
        candidates: &["動画No", "#", "videoNo", "動画番号"],
    };
    pub const VIDEO_ID: Field = Field {
        name: "videoId",
        candidates: &["動画ID", "videoId", "video_id"],
    };
    pub const ID: Field = Field {
        name: "id",
        candidates: &["コメントID", "コメントid", "commentId", "#", "id", "ID"],
    };
    pub const TITLE: Field = Field {
        name: "title",
        candidates: &["動画タイトル", "タイトル", "title", "videoTitle", "動画名"],
    };
    pub const AUTHOR: Field = Field {
        name: "author",
        candidates: &["投稿者", "author", "投稿者名", "ユーザー名", "ユーザー"],
    };
    pub const DATE: Field = Field {
        name: "date",
        candidates: &["投稿日時", "日付", "date", "投稿日", "datetime"],
    };
    pub const TEXT: Field = Field {
        name: "text",
        candidates: &[
            "コメント本文",
            "コメント",
            "text",
            "コメント内容",
            "内容",
            "comment",
        ],
    };
    pub const LIKE_COUNT: Field = Field {
        name: "likeCount",
        candidates: &["高評価数", "likeCount", "いいね数", "likes"],
    };

    pub const ALL: &[Field] = &[
        VIDEO_NO, VIDEO_ID, ID, TITLE, AUTHOR, DATE, TEXT, LIKE_COUNT,
    ];

    pub const IDENTIFYING: &[Field] = &[VIDEO_NO, VIDEO_ID, ID];
}

/// First non-empty value among the field's candidate headers, trimmed.
pub fn resolve<'a>(row: &'a RawRow, field: &Field) -> Option<&'a str> {
    field
        .candidates
        .iter()
        .filter_map(|header| row.value(header))
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Resolved value, or the empty string.
pub fn resolve_text(row: &RawRow, field: &Field) -> String {
    resolve(row, field).unwrap_or("").to_string()
}

/// True when some candidate column of some field holds its own header text,
/// as happens when a sheet's header line is exported as a data row.
pub fn is_header_echo(row: &RawRow, fields: &[Field]) -> bool {
    fields.iter().any(|field| {
        field
            .candidates
            .iter()
            .any(|header| row.value(header).map(str::trim) == Some(*header))
    })
}

/// True when at least one of the fields resolves to a non-empty value.
pub fn has_any(row: &RawRow, fields: &[Field]) -> bool {
    fields.iter().any(|field| resolve(row, field).is_some())
}

/// Integer count from a cell: thousands separators removed, leading integer
/// taken (`"1,234.0"` is 1234), anything unreadable is 0.
pub fn parse_count(value: &str) -> i64 {
    let cleaned = value.replace(',', "");
    LEADING_INT_RE
        .captures(&cleaned)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Leading run of digits (`"13.0"` is 13), if the value starts with one.
pub fn leading_digits(value: &str) -> Option<i64> {
    LEADING_DIGITS_RE
        .captures(value.trim())
        .and_then(|caps| caps[1].parse().ok())
}
