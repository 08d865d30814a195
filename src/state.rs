//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ComicService, CommentService, SiteService};
use crate::domain::repositories::{
    ComicRepository, CommentRepository, SiteRepository, StatusRepository,
};
use crate::infrastructure::persistence::{
    PgComicRepository, PgCommentRepository, PgSiteRepository, PgStatusRepository,
};

/// Handle to the services backing the routes.
///
/// Cloning is cheap; every field is reference counted. The store behind the
/// services is whatever the repositories were built over, so tests can swap in
/// an in-memory implementation through [`AppState::new`].
#[derive(Clone)]
pub struct AppState {
    pub site_service: Arc<SiteService>,
    pub comic_service: Arc<ComicService>,
    pub comment_service: Arc<CommentService>,
    pub status: Arc<dyn StatusRepository>,
}

impl AppState {
    /// Builds the state from repository implementations.
    pub fn new(
        sites: Arc<dyn SiteRepository>,
        comics: Arc<dyn ComicRepository>,
        comments: Arc<dyn CommentRepository>,
        status: Arc<dyn StatusRepository>,
    ) -> Self {
        Self {
            site_service: Arc::new(SiteService::new(sites.clone())),
            comic_service: Arc::new(ComicService::new(comics, sites)),
            comment_service: Arc::new(CommentService::new(comments)),
            status,
        }
    }

    /// Builds the state over PostgreSQL repositories sharing one pool.
    pub fn from_pool(pool: PgPool) -> Self {
        let pool = Arc::new(pool);

        Self::new(
            Arc::new(PgSiteRepository::new(pool.clone())),
            Arc::new(PgComicRepository::new(pool.clone())),
            Arc::new(PgCommentRepository::new(pool.clone())),
            Arc::new(PgStatusRepository::new(pool)),
        )
    }
}
