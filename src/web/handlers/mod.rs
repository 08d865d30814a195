//! Page handlers and their templates.

mod add_comic;
mod add_comment;
mod comic_page;
mod home;

pub use add_comic::{AddComicTemplate, add_comic_handler, add_comic_page_handler};
pub use add_comment::{AddCommentTemplate, add_comment_handler, add_comment_page_handler};
pub use comic_page::{ComicPageTemplate, comic_page_handler};
pub use home::{HomeTemplate, home_handler};
