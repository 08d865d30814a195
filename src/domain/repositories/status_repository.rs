//! Repository trait for store diagnostics.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trivial queries used by `/dbTest` and `/health`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Returns the store's current date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    async fn current_date(&self) -> Result<NaiveDate, AppError>;
}
