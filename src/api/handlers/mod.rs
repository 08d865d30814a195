//! HTTP request handlers for JSON endpoints.

pub mod comments;
pub mod health;
pub mod random_comic;

pub use comments::comments_handler;
pub use db_test::db_test_handler;
pub use health::health_handler;
pub use random_comic::random_comic_handler;
