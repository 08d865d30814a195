//! Repository trait for reader comments.

use crate::domain::entities::{Comment, NewComment, PostedComment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for comments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Lists the comments of a comic, oldest first.
    ///
    /// An unknown comic simply has no comments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_comic(&self, comic_id: i64) -> Result<Vec<Comment>, AppError>;

    /// Inserts a comment and resolves the owning site of its comic in one step.
    ///
    /// Returns `None` without inserting anything when the comic does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_comment: NewComment) -> Result<Option<PostedComment>, AppError>;
}
