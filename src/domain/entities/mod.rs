//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Site`] - A publication that comics belong to
//! - [`Comic`] - A single published strip
//! - [`ComicWithSite`] - A comic joined with its owning site
//! - [`Comment`] - A reader remark attached to one comic
//!
//! Creation inputs use separate records (`NewSite`, `NewComic`, `NewComment`).
//! Nothing is ever updated or deleted by the web application.

pub mod comic;
pub mod comment;
pub mod site;

pub use comic::{Comic, ComicWithSite, NewComic};
pub use comment::{Comment, NewComment, PostedComment};
pub use site::{NewSite, Site};
