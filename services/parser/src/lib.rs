//! Parser - Turns raw sheet rows into canonical videos and comments
//!
//! Responsibilities:
//! - Map localized and legacy column headers onto canonical fields
//! - Drop header-echo, blank and invalid rows
//! - Coerce counts to integers, never failing on malformed input
//! - Read the date and duration encodings the exports produce
//!
//! Normalization is deterministic: the same rows always yield the same
//! records in the same order.

pub mod fields;
pub mod models;
pub mod normalize;
pub mod temporal;

pub use models::{Comment, Video};
pub use normalize::{convert_comments, convert_videos, NormalizeStats};
