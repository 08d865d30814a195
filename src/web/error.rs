//! HTML rendering of [`AppError`].

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};
use validator::ValidationErrors;

use crate::error::AppError;

const INTERNAL_MESSAGE: &str = "Something went wrong on our side. Please try again later.";

/// Template for error pages.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub reason: String,
    pub message: String,
    /// Names of rejected form fields, if any.
    pub fields: Vec<String>,
}

/// Error returned by page handlers.
///
/// Renders the same taxonomy as the JSON API, as a page with the matching
/// status code. Internal errors only ever show a generic message; the cause
/// has already been logged where it happened.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl From<ValidationErrors> for PageError {
    fn from(e: ValidationErrors) -> Self {
        Self(AppError::from(e))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();

        let (message, fields) = match self.0 {
            AppError::Internal { .. } => (INTERNAL_MESSAGE.to_string(), Vec::new()),
            AppError::Validation { message, details } => {
                let mut fields: Vec<String> = details
                    .as_object()
                    .map(|map| {
                        map.keys()
                            .filter(|key| key.as_str() != "reason")
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default();
                fields.sort();
                (message, fields)
            }
            other => (other.to_string(), Vec::new()),
        };

        tracing::debug!(status = status.as_u16(), %message, "Rendering error page");

        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
            fields,
        };

        (status, page).into_response()
    }
}
