//! Repository trait for comic sites.

use crate::domain::entities::{NewSite, Site};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for comic sites.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSiteRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// Lists all sites ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Site>, AppError>;

    /// Finds a site by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Site>, AppError>;

    /// Creates a new site.
    ///
    /// Only the administration CLI creates sites.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_site: NewSite) -> Result<Site, AppError>;
}
