//! Site management service.

use crate::domain::entities::{NewSite, Site};
use crate::domain::repositories::SiteRepository;
use crate::error::AppError;
use crate::utils::validation::validate_http_url;
use serde_json::json;
use std::sync::Arc;

/// Service for comic sites.
pub struct SiteService {
    repository: Arc<dyn SiteRepository>,
}

impl SiteService {
    /// Creates a new site service.
    pub fn new(repository: Arc<dyn SiteRepository>) -> Self {
        Self { repository }
    }

    /// Lists all sites ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_sites(&self) -> Result<Vec<Site>, AppError> {
        self.repository.list().await
    }

    /// Creates a new site.
    ///
    /// # Validation
    ///
    /// - Name: 1-255 characters after trimming
    /// - URL: absolute `http` or `https` URL
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Conflict`] if a site with this name already exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_site(&self, name: &str, url: &str) -> Result<Site, AppError> {
        let name = name.trim();
        let url = url.trim();

        if name.is_empty() || name.chars().count() > 255 {
            return Err(AppError::bad_request(
                "Invalid site name length",
                json!({"min": 1, "max": 255}),
            ));
        }

        if validate_http_url(url).is_err() {
            return Err(AppError::bad_request(
                "Invalid site URL",
                json!({"hint": "Use an absolute http:// or https:// URL"}),
            ));
        }

        self.repository
            .create(NewSite {
                name: name.to_string(),
                url: url.to_string(),
            })
            .await
    }
}
