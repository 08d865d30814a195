//! PostgreSQL implementation of comment repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{CommentRow, PostedCommentRow};
use crate::domain::entities::{Comment, NewComment, PostedComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

/// PostgreSQL repository for comments.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn list_by_comic(&self, comic_id: i64) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, author, email, body, comic_id, created_at
            FROM comments
            WHERE comic_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(comic_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    /// Single statement: the comment is inserted only when the comic exists,
    /// and the owning site comes back with the inserted row.
    async fn create(&self, new_comment: NewComment) -> Result<Option<PostedComment>, AppError> {
        let row = sqlx::query_as::<_, PostedCommentRow>(
            r#"
            WITH target AS (
                SELECT id, site_id FROM comics WHERE id = $4
            ),
            inserted AS (
                INSERT INTO comments (author, email, body, comic_id)
                SELECT $1, $2, $3, target.id
                FROM target
                RETURNING id, comic_id
            )
            SELECT i.id, i.comic_id, t.site_id
            FROM inserted i
            JOIN target t ON t.id = i.comic_id
            "#,
        )
        .bind(new_comment.author)
        .bind(new_comment.email)
        .bind(new_comment.body)
        .bind(new_comment.comic_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(PostedComment::from))
    }
}
