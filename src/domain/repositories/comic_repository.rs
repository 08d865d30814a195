//! Repository trait for comics.

use crate::domain::entities::{Comic, ComicWithSite, NewComic};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for comics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgComicRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComicRepository: Send + Sync {
    /// Picks one comic uniformly at random, joined with its site.
    ///
    /// Returns `None` when there are no comics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn random_with_site(&self) -> Result<Option<ComicWithSite>, AppError>;

    /// Lists the comics of a site ordered by publish date, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_site(&self, site_id: i64) -> Result<Vec<Comic>, AppError>;

    /// Finds a comic joined with its site.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_with_site(&self, id: i64) -> Result<Option<ComicWithSite>, AppError>;

    /// Inserts a comic if its site exists.
    ///
    /// Returns `None` without inserting anything when `site_id` matches no site.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_comic: NewComic) -> Result<Option<Comic>, AppError>;
}
