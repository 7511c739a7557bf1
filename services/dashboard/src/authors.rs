//! Per-author comment statistics.

use parser::temporal::parse_date;
use parser::Comment;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStat {
    pub author: String,
    pub count: usize,
    /// Raw date text of the author's newest readable comment.
    pub last_date: Option<String>,
}

/// Group comments by exact author name. Most active authors first; equal
/// counts keep first-appearance order.
pub fn aggregate_authors(comments: &[Comment]) -> Vec<AuthorStat> {
    let mut stats: Vec<AuthorStat> = Vec::new();
    let mut newest: Vec<Option<i64>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for comment in comments {
        let slot = *index.entry(comment.author.as_str()).or_insert_with(|| {
            stats.push(AuthorStat {
                author: comment.author.clone(),
                count: 0,
                last_date: None,
            });
            newest.push(None);
            stats.len() - 1
        });
        stats[slot].count += 1;

        let shape = parse_date(&comment.date);
        if !shape.is_parsed() {
            continue;
        }
        let value = shape.sort_value();
        if newest[slot].map_or(true, |current| value > current) {
            newest[slot] = Some(value);
            stats[slot].last_date = Some(comment.date.clone());
        }
    }

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}
