//! Add-comment form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Redirect};

use crate::domain::entities::ComicWithSite;
use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::extract::{PagePath, ValidatedForm};
use crate::web::forms::AddCommentForm;

/// Template for the add-comment form.
#[derive(Template, WebTemplate)]
#[template(path = "add_comment.html")]
pub struct AddCommentTemplate {
    pub comic: ComicWithSite,
}

/// Renders the comment form for a comic.
///
/// # Endpoint
///
/// `GET /addComment/{comic_id}`
///
/// # Errors
///
/// Returns 404 if the comic does not exist.
pub async fn add_comment_page_handler(
    PagePath(comic_id): PagePath<i64>,
    State(state): State<AppState>,
) -> Result<AddCommentTemplate, PageError> {
    let comic = state.comic_service.get_comic(comic_id).await?;

    Ok(AddCommentTemplate { comic })
}

/// Stores a comment and returns to the comic list of the comic's site.
///
/// # Endpoint
///
/// `POST /addComment/{comic_id}`
///
/// # Form Fields
///
/// `username`, `email`, `comment`
///
/// # Errors
///
/// Returns 400 if the id is not an integer or a field is missing or invalid.
/// Returns 404 if the comic does not exist; nothing is stored.
pub async fn add_comment_handler(
    PagePath(comic_id): PagePath<i64>,
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<AddCommentForm>,
) -> Result<Redirect, PageError> {
    let posted = state
        .comment_service
        .add_comment(form.into_new_comment(comic_id))
        .await?;

    Ok(Redirect::to(&format!("/comicPage/{}", posted.site_id)))
}
