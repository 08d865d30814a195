//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so handlers never touch SQL directly.
//! The PostgreSQL implementations live in `crate::infrastructure::persistence`;
//! tests substitute mocks (generated via `mockall`) or in-memory stores.
//!
//! # Available Repositories
//!
//! - [`SiteRepository`] - Site listing and lookup
//! - [`ComicRepository`] - Comic listing, random pick and creation
//! - [`CommentRepository`] - Comment listing and creation
//! - [`StatusRepository`] - Store liveness probe

pub mod comic_repository;
pub mod comment_repository;
pub mod site_repository;
pub mod status_repository;

pub use comic_repository::ComicRepository;
pub use comment_repository::CommentRepository;
pub use site_repository::SiteRepository;
pub use status_repository::StatusRepository;

#[cfg(test)]
pub use comic_repository::MockComicRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use site_repository::MockSiteRepository;
#[cfg(test)]
pub use status_repository::MockStatusRepository;
