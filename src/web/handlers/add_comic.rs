//! Add-comic form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Redirect};

use crate::domain::entities::Site;
use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::extract::ValidatedForm;
use crate::web::forms::AddComicForm;

/// Template for the add-comic form.
///
/// Renders `templates/add_comic.html` with a site picker.
#[derive(Template, WebTemplate)]
#[template(path = "add_comic.html")]
pub struct AddComicTemplate {
    pub sites: Vec<Site>,
}

/// Renders the add-comic form.
///
/// # Endpoint
///
/// `GET /addComic`
pub async fn add_comic_page_handler(
    State(state): State<AppState>,
) -> Result<AddComicTemplate, PageError> {
    let sites = state.site_service.list_sites().await?;

    Ok(AddComicTemplate { sites })
}

/// Stores a submitted comic and returns to the home page.
///
/// # Endpoint
///
/// `POST /addComic`
///
/// # Form Fields
///
/// `title`, `url`, `publishDate` (`YYYY-MM-DD`), `site_id`
///
/// # Errors
///
/// Returns 400 if a field is missing or invalid, or the site does not exist.
pub async fn add_comic_handler(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<AddComicForm>,
) -> Result<Redirect, PageError> {
    state
        .comic_service
        .add_comic(form.into_new_comic())
        .await?;

    Ok(Redirect::to("/"))
}
