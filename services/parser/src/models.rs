use crate::fields::leading_digits;
use crate::temporal::{date_sort_value, parse_duration_seconds};
use serde::{Deserialize, Serialize};

/// A video row. `id` is the join key comments refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    /// Raw date text as exported.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: i64,
    /// Raw duration text as exported.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl Video {
    pub fn date_sort_value(&self) -> i64 {
        date_sort_value(&self.date)
    }

    pub fn duration_seconds(&self) -> u64 {
        parse_duration_seconds(&self.duration)
    }
}

/// A comment row. `video_no` points at [`Video::id`]; `video_id` is the
/// external video identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub video_no: i64,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    pub author: String,
    /// Raw date-time text as exported.
    #[serde(default)]
    pub date: String,
    pub text: String,
    #[serde(default)]
    pub like_count: i64,
}

impl Comment {
    /// Video number this comment belongs to: `video_no` when set, otherwise
    /// a numeric `video_id`.
    pub fn join_key(&self) -> Option<i64> {
        if self.video_no > 0 {
            return Some(self.video_no);
        }
        leading_digits(&self.video_id).filter(|n| *n > 0)
    }

    pub fn date_sort_value(&self) -> i64 {
        date_sort_value(&self.date)
    }
}
