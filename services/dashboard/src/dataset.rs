use parser::{Comment, Video};
use serde::{Deserialize, Serialize};

/// Both collections as loaded at startup. Never mutated after loading;
/// share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Dataset {
    pub fn new(videos: Vec<Video>, comments: Vec<Comment>) -> Self {
        Self { videos, comments }
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty() && self.comments.is_empty()
    }

    pub fn video(&self, id: i64) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn video(id: i64, title: &str) -> Video {
        Video {
            id,
            title: title.to_string(),
            thumbnail: String::new(),
            date: String::new(),
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            duration: String::new(),
            url: String::new(),
            description: String::new(),
        }
    }

    pub fn comment(id: &str, video_no: i64, author: &str, date: &str) -> Comment {
        Comment {
            id: id.to_string(),
            video_no,
            video_id: String::new(),
            title: String::new(),
            author: author.to_string(),
            date: date.to_string(),
            text: format!("comment {}", id),
            like_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{comment, video};
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let data = Dataset::new(vec![video(1, "a"), video(5, "b")], vec![]);
        assert_eq!(data.video(5).map(|v| v.title.as_str()), Some("b"));
        assert!(data.video(2).is_none());
    }

    #[test]
    fn test_is_empty() {
        assert!(Dataset::default().is_empty());
        let data = Dataset::new(vec![], vec![comment("1", 1, "A", "")]);
        assert!(!data.is_empty());
    }
}
