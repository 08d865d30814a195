//! Domain entities for reader comments.

use chrono::{DateTime, Utc};

/// A free-text reader remark attached to exactly one comic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub email: String,
    pub body: String,
    pub comic_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for posting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub email: String,
    pub body: String,
    pub comic_id: i64,
}

/// Result of posting a comment.
///
/// Carries the owning site of the commented comic, resolved by the same
/// statement that inserted the comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostedComment {
    pub id: i64,
    pub comic_id: i64,
    pub site_id: i64,
}
