//! PostgreSQL implementation of comic repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{ComicRow, ComicWithSiteRow};
use crate::domain::entities::{Comic, ComicWithSite, NewComic};
use crate::domain::repositories::ComicRepository;
use crate::error::AppError;

/// PostgreSQL repository for comics.
pub struct PgComicRepository {
    pool: Arc<PgPool>,
}

impl PgComicRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComicRepository for PgComicRepository {
    // Full sort on every call; fine at the sizes this board runs at.
    async fn random_with_site(&self) -> Result<Option<ComicWithSite>, AppError> {
        let row = sqlx::query_as::<_, ComicWithSiteRow>(
            r#"
            SELECT c.id, c.title, c.url, c.publish_date, c.site_id,
                   s.name AS site_name, s.url AS site_url
            FROM comics c
            JOIN sites s ON s.id = c.site_id
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ComicWithSite::from))
    }

    async fn list_by_site(&self, site_id: i64) -> Result<Vec<Comic>, AppError> {
        let rows = sqlx::query_as::<_, ComicRow>(
            r#"
            SELECT id, title, url, publish_date, site_id
            FROM comics
            WHERE site_id = $1
            ORDER BY publish_date ASC, id ASC
            "#,
        )
        .bind(site_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Comic::from).collect())
    }

    async fn find_with_site(&self, id: i64) -> Result<Option<ComicWithSite>, AppError> {
        let row = sqlx::query_as::<_, ComicWithSiteRow>(
            r#"
            SELECT c.id, c.title, c.url, c.publish_date, c.site_id,
                   s.name AS site_name, s.url AS site_url
            FROM comics c
            JOIN sites s ON s.id = c.site_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ComicWithSite::from))
    }

    async fn create(&self, new_comic: NewComic) -> Result<Option<Comic>, AppError> {
        let row = sqlx::query_as::<_, ComicRow>(
            r#"
            INSERT INTO comics (title, url, publish_date, site_id)
            SELECT $1, $2, $3, s.id
            FROM sites s
            WHERE s.id = $4
            RETURNING id, title, url, publish_date, site_id
            "#,
        )
        .bind(new_comic.title)
        .bind(new_comic.url)
        .bind(new_comic.publish_date)
        .bind(new_comic.site_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Comic::from))
    }
}
