//! API route configuration.

use crate::api::handlers::{comments_handler, random_comic_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON routes consumed by the browser script, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /randomComic`           - One random comic with its site, or `null`
/// - `GET /comments/{comic_id}`   - Comments of a comic
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/randomComic", get(random_comic_handler))
        .route("/comments/{comic_id}", get(comments_handler))
}
