//! PostgreSQL implementation of the status probe.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::StatusRepository;
use crate::error::AppError;

pub struct PgStatusRepository {
    pool: Arc<PgPool>,
}

impl PgStatusRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepository for PgStatusRepository {
    async fn current_date(&self) -> Result<NaiveDate, AppError> {
        let date = sqlx::query_scalar::<_, NaiveDate>("SELECT CURRENT_DATE")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(date)
    }
}
