//! DTOs for the comments endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Comment;

/// A comment as shown in the comments modal.
///
/// The commenter's email is stored but never published.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentItem {
    pub comment_id: i64,
    pub author: String,
    pub comment: String,
    pub comic_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentItem {
    fn from(c: Comment) -> Self {
        Self {
            comment_id: c.id,
            author: c.author,
            comment: c.body,
            comic_id: c.comic_id,
            created_at: c.created_at,
        }
    }
}
