//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    add_comic_handler, add_comic_page_handler, add_comment_handler, add_comment_page_handler,
    comic_page_handler, home_handler,
};
use axum::{Router, routing::get};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET  /`                        - Site list and a random comic
/// - `GET  /addComic`                - Add-comic form
/// - `POST /addComic`                - Store a comic, redirect to `/`
/// - `GET  /comicPage/{site_id}`     - Comics of a site, oldest first
/// - `GET  /addComment/{comic_id}`   - Add-comment form
/// - `POST /addComment/{comic_id}`   - Store a comment, redirect to the site page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route(
            "/addComic",
            get(add_comic_page_handler).post(add_comic_handler),
        )
        .route("/comicPage/{site_id}", get(comic_page_handler))
        .route(
            "/addComment/{comic_id}",
            get(add_comment_page_handler).post(add_comment_handler),
        )
}
