//! Comic list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::{Comic, Site};
use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::extract::PagePath;

/// Template for the comics of one site.
///
/// Renders `templates/comic_page.html`: comics oldest first, each with links
/// to add a comment and to open the comments modal.
#[derive(Template, WebTemplate)]
#[template(path = "comic_page.html")]
pub struct ComicPageTemplate {
    pub site: Site,
    pub comics: Vec<Comic>,
}

/// Renders the comic list of a site.
///
/// # Endpoint
///
/// `GET /comicPage/{site_id}`
///
/// # Errors
///
/// Returns 400 if the id is not an integer.
/// Returns 404 if the site does not exist.
pub async fn comic_page_handler(
    PagePath(site_id): PagePath<i64>,
    State(state): State<AppState>,
) -> Result<ComicPageTemplate, PageError> {
    let page = state.comic_service.site_page(site_id).await?;

    Ok(ComicPageTemplate {
        site: page.site,
        comics: page.comics,
    })
}
