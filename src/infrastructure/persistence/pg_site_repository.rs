//! PostgreSQL implementation of site repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::SiteRow;
use crate::domain::entities::{NewSite, Site};
use crate::domain::repositories::SiteRepository;
use crate::error::AppError;

/// PostgreSQL repository for comic sites.
pub struct PgSiteRepository {
    pool: Arc<PgPool>,
}

impl PgSiteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SiteRepository for PgSiteRepository {
    async fn list(&self) -> Result<Vec<Site>, AppError> {
        let rows = sqlx::query_as::<_, SiteRow>(
            r#"
            SELECT id, name, url
            FROM sites
            ORDER BY name, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Site::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Site>, AppError> {
        let row = sqlx::query_as::<_, SiteRow>("SELECT id, name, url FROM sites WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Site::from))
    }

    async fn create(&self, new_site: NewSite) -> Result<Site, AppError> {
        let row = sqlx::query_as::<_, SiteRow>(
            r#"
            INSERT INTO sites (name, url)
            VALUES ($1, $2)
            RETURNING id, name, url
            "#,
        )
        .bind(new_site.name)
        .bind(new_site.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
