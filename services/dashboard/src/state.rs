//! Session state: which view is shown, how each table is sorted and which
//! video's comments are open. The dataset itself is shared and read-only.

use crate::dataset::Dataset;
use crate::sort::{CommentColumn, Direction, VideoColumn};
use crate::views::{self, AuthorsView, CommentsView, VideoOption, VideosView};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Videos,
    Comments,
    Authors,
}

/// Sort column and direction for one table. No column means input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    pub column: Option<C>,
    pub direction: Direction,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self {
            column: None,
            direction: Direction::Asc,
        }
    }
}

impl<C: Copy + PartialEq> SortState<C> {
    pub fn new(column: C, direction: Direction) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    /// Selecting the current column flips the direction; any other column
    /// starts ascending.
    pub fn toggle(&mut self, column: C) {
        if self.column == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(column);
            self.direction = Direction::Asc;
        }
    }

    /// `▲`/`▼` for the active column, `↕` for the others.
    pub fn indicator(&self, column: C) -> &'static str {
        match (self.column == Some(column), self.direction) {
            (true, Direction::Asc) => "▲",
            (true, Direction::Desc) => "▼",
            (false, _) => "↕",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub data: Arc<Dataset>,
    pub view: View,
    pub video_sort: SortState<VideoColumn>,
    pub comment_sort: SortState<CommentColumn>,
    pub selected_video: Option<i64>,
}

impl AppState {
    pub fn new(data: Arc<Dataset>) -> Self {
        Self {
            data,
            view: View::default(),
            video_sort: SortState::default(),
            comment_sort: SortState::default(),
            selected_video: None,
        }
    }

    pub fn switch_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn select_video(&mut self, video_id: Option<i64>) {
        self.selected_video = video_id.filter(|id| *id > 0);
    }

    /// Jump from a video row to its comments.
    pub fn open_comments(&mut self, video_id: i64) {
        self.select_video(Some(video_id));
        self.view = View::Comments;
    }

    pub fn toggle_video_sort(&mut self, column: VideoColumn) {
        self.video_sort.toggle(column);
    }

    pub fn toggle_comment_sort(&mut self, column: CommentColumn) {
        self.comment_sort.toggle(column);
    }

    pub fn videos_view(&self) -> VideosView {
        views::videos_view(&self.data, &self.video_sort)
    }

    pub fn comments_view(&self) -> CommentsView {
        views::comments_view(&self.data, self.selected_video, &self.comment_sort)
    }

    pub fn authors_view(&self) -> AuthorsView {
        views::authors_view(&self.data)
    }

    pub fn video_options(&self) -> Vec<VideoOption> {
        views::video_options(&self.data)
    }
}
