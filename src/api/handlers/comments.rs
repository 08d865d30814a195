//! Handler for the comments modal.

use axum::{Json, extract::State};

use crate::api::dto::comment::CommentItem;
use crate::api::extract::ApiPath;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the comments of a comic, oldest first.
///
/// # Endpoint
///
/// `GET /api/comments/{comicId}`
///
/// Always an array; a comic without comments yields `[]`. A non-integer id
/// is rejected with a 400 error envelope.
pub async fn comments_handler(
    ApiPath(comic_id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CommentItem>>, AppError> {
    let comments = state
        .comment_service
        .comments_for_comic(comic_id)
        .await?;

    Ok(Json(comments.into_iter().map(CommentItem::from).collect()))
}
