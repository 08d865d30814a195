//! Application layer services.
//!
//! Services own the query plan of each route: they call repositories in
//! order, translate "no row" into [`crate::error::AppError::NotFound`] and hand
//! handlers fully resolved data.
//!
//! # Available Services
//!
//! - [`services::site_service::SiteService`] - Site listing, lookup and creation
//! - [`services::comic_service::ComicService`] - Comic pages, random pick, creation
//! - [`services::comment_service::CommentService`] - Comment listing and posting

pub mod services;
