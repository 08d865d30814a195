//! Top-level router combining pages, the JSON API and static assets.
//!
//! # Route Structure
//!
//! - `/`, `/addComic`, `/comicPage/{site_id}`, `/addComment/{comic_id}` - Pages
//! - `/api/*`            - JSON for the browser script
//! - `GET /dbTest`       - Trivial store query
//! - `GET /health`       - Health check
//! - everything else     - Files from the static directory (`/js/script.js`, ...)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{db_test_handler, health_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes, without path normalization.
///
/// `static_dir` is served as the fallback, so assets live at the site root.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .nest("/api", api::routes::routes())
        .route("/dbTest", get(db_test_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/addComic/` reaches the
/// same handler as `/addComic`.
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, static_dir))
}
