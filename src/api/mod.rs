//! JSON API layer.
//!
//! Serves the two widgets driven by the browser script (random comic and
//! comments modal) plus store diagnostics.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads
//! - [`extract`] - Path extractor with JSON rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
