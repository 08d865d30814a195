//! Comic service: site pages, random pick and submissions.

use crate::domain::entities::{Comic, ComicWithSite, NewComic, Site};
use crate::domain::repositories::{ComicRepository, SiteRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Everything the comic list page of one site needs.
#[derive(Debug, Clone)]
pub struct SitePage {
    pub site: Site,
    /// Oldest first.
    pub comics: Vec<Comic>,
}

/// Service for reading and submitting comics.
pub struct ComicService {
    comics: Arc<dyn ComicRepository>,
    sites: Arc<dyn SiteRepository>,
}

impl ComicService {
    /// Creates a new comic service.
    pub fn new(comics: Arc<dyn ComicRepository>, sites: Arc<dyn SiteRepository>) -> Self {
        Self { comics, sites }
    }

    /// Picks a random comic with its site, or `None` when no comics exist.
    ///
    /// Read-only: repeated calls never change stored data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn random_comic(&self) -> Result<Option<ComicWithSite>, AppError> {
        self.comics.random_with_site().await
    }

    /// Loads a site and its comics ordered by publish date.
    ///
    /// The site is resolved first; an unknown site never reaches the comic query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the site does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn site_page(&self, site_id: i64) -> Result<SitePage, AppError> {
        let site = self
            .sites
            .find_by_id(site_id)
            .await?
            .ok_or_else(|| AppError::not_found("Site not found", json!({"site_id": site_id})))?;

        let comics = self.comics.list_by_site(site.id).await?;

        Ok(SitePage { site, comics })
    }

    /// Retrieves one comic joined with its site.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comic does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_comic(&self, comic_id: i64) -> Result<ComicWithSite, AppError> {
        self.comics
            .find_with_site(comic_id)
            .await?
            .ok_or_else(|| AppError::not_found("Comic not found", json!({"comic_id": comic_id})))
    }

    /// Stores a new comic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `site_id` does not name a site.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_comic(&self, new_comic: NewComic) -> Result<Comic, AppError> {
        let site_id = new_comic.site_id;

        let comic = self.comics.create(new_comic).await?.ok_or_else(|| {
            AppError::bad_request("Unknown site", json!({"site_id": site_id}))
        })?;

        tracing::info!(comic_id = comic.id, site_id, "Comic added");

        Ok(comic)
    }
}
