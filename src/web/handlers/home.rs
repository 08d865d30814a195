//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::{ComicWithSite, Site};
use crate::state::AppState;
use crate::web::error::PageError;

/// Template for the home page.
///
/// Renders `templates/home.html` with:
/// - The site list (navigation)
/// - A random comic, when any exist
/// - The "random comic" button driven by `public/js/script.js`
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub sites: Vec<Site>,
    pub random_comic: Option<ComicWithSite>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<HomeTemplate, PageError> {
    let sites = state.site_service.list_sites().await?;
    let random_comic = state.comic_service.random_comic().await?;

    Ok(HomeTemplate {
        sites,
        random_comic,
    })
}
