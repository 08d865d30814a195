//! Server-rendered pages.
//!
//! Uses Askama templates (`templates/`) for HTML and form posts with the
//! POST/redirect/GET pattern.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers and their templates
//! - [`forms`] - Typed, validated form records
//! - [`extract`] - Form extractor that validates before the handler runs
//! - [`error`] - HTML error page
//! - [`routes`] - Page route configuration

pub mod error;
pub mod extract;
pub mod forms;
pub mod handlers;
pub mod routes;
