//! Comment service.

use crate::domain::entities::{Comment, NewComment, PostedComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for reader comments.
pub struct CommentService {
    repository: Arc<dyn CommentRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    /// Lists the comments attached to a comic, oldest first.
    ///
    /// A comic without comments (or an unknown comic) yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn comments_for_comic(&self, comic_id: i64) -> Result<Vec<Comment>, AppError> {
        self.repository.list_by_comic(comic_id).await
    }

    /// Posts a comment on a comic.
    ///
    /// The returned [`PostedComment`] names the site owning the comic, which is
    /// where the browser is sent next.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comic does not exist; nothing is stored.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_comment(&self, new_comment: NewComment) -> Result<PostedComment, AppError> {
        let comic_id = new_comment.comic_id;

        let posted = self
            .repository
            .create(new_comment)
            .await?
            .ok_or_else(|| AppError::not_found("Comic not found", json!({"comic_id": comic_id})))?;

        tracing::info!(
            comment_id = posted.id,
            comic_id = posted.comic_id,
            "Comment posted"
        );

        Ok(posted)
    }
}
