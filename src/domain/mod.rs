//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Sites, comics, comments and their creation records
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or SQL. Concrete storage lives in
//! [`crate::infrastructure::persistence`]; handlers reach it through
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
