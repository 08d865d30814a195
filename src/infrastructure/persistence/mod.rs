//! PostgreSQL repository implementations.
//!
//! Queries are plain parameterized statements executed with SQLx against a
//! shared [`sqlx::PgPool`]. Each statement acquires a pooled connection for its
//! own duration only; no transaction spans more than one statement.
//!
//! # Repositories
//!
//! - [`PgSiteRepository`] - Site listing and lookup
//! - [`PgComicRepository`] - Comic queries and creation
//! - [`PgCommentRepository`] - Comment queries and creation
//! - [`PgStatusRepository`] - Liveness probe

mod rows;

pub mod pg_comic_repository;
pub mod pg_comment_repository;
pub mod pg_site_repository;
pub mod pg_status_repository;

pub use pg_comic_repository::PgComicRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_site_repository::PgSiteRepository;
pub use pg_status_repository::PgStatusRepository;
