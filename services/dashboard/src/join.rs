//! Comment to video association.

use crate::dataset::Dataset;
use parser::temporal::EPOCH_MIN;
use parser::{Comment, Video};
use serde::Serialize;
use std::collections::HashMap;

/// A video with the values derived from its comments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRow {
    #[serde(flatten)]
    pub video: Video,
    /// Raw date text of the newest matched comment.
    pub last_comment_date: Option<String>,
    pub matched_comments: usize,
}

/// Comments whose join key equals `video_id`, in input order.
pub fn comments_for_video(comments: &[Comment], video_id: i64) -> Vec<&Comment> {
    comments
        .iter()
        .filter(|c| c.join_key() == Some(video_id))
        .collect()
}

/// Raw date of the comment with the greatest positive sort value. Ties keep
/// the first one; comments without a readable date never count.
pub fn last_comment_date<'a, I>(comments: I) -> Option<String>
where
    I: IntoIterator<Item = &'a Comment>,
{
    let mut best: Option<(&str, i64)> = None;
    for comment in comments {
        let value = comment.date_sort_value();
        if value <= EPOCH_MIN {
            continue;
        }
        if best.map_or(true, |(_, current)| value > current) {
            best = Some((comment.date.as_str(), value));
        }
    }
    best.map(|(date, _)| date.to_string())
}

/// Every video, in dataset order, with its last-comment date. Comments that
/// match no video are ignored.
pub fn video_rows(data: &Dataset) -> Vec<VideoRow> {
    let mut by_video: HashMap<i64, Vec<&Comment>> = HashMap::new();
    for comment in &data.comments {
        if let Some(key) = comment.join_key() {
            by_video.entry(key).or_default().push(comment);
        }
    }

    data.videos
        .iter()
        .map(|video| {
            let matched = by_video.get(&video.id).map(Vec::as_slice).unwrap_or(&[]);
            VideoRow {
                video: video.clone(),
                last_comment_date: last_comment_date(matched.iter().copied()),
                matched_comments: matched.len(),
            }
        })
        .collect()
}
