//! Business logic services for the application layer.

pub mod comic_service;
pub mod comment_service;
pub mod site_service;

pub use comic_service::{ComicService, SitePage};
pub use comment_service::CommentService;
pub use site_service::SiteService;
