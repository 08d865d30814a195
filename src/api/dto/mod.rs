//! Data Transfer Objects for API responses.
//!
//! Field names are camelCase; the browser script reads them directly.

pub mod comic;
pub mod comment;
pub mod health;
