//! Row records decoded from query results.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::domain::entities::{Comic, ComicWithSite, Comment, PostedComment, Site};

#[derive(FromRow)]
pub(crate) struct SiteRow {
    pub id: i64,
    pub name: String,
    pub url: String,
}

impl From<SiteRow> for Site {
    fn from(row: SiteRow) -> Self {
        Site::new(row.id, row.name, row.url)
    }
}

#[derive(FromRow)]
pub(crate) struct ComicRow {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub publish_date: NaiveDate,
    pub site_id: i64,
}

impl From<ComicRow> for Comic {
    fn from(row: ComicRow) -> Self {
        Comic::new(row.id, row.title, row.url, row.publish_date, row.site_id)
    }
}

// Join fields come from `sites`.
#[derive(FromRow)]
pub(crate) struct ComicWithSiteRow {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub publish_date: NaiveDate,
    pub site_id: i64,
    pub site_name: String,
    pub site_url: String,
}

impl From<ComicWithSiteRow> for ComicWithSite {
    fn from(row: ComicWithSiteRow) -> Self {
        ComicWithSite {
            id: row.id,
            title: row.title,
            url: row.url,
            publish_date: row.publish_date,
            site_id: row.site_id,
            site_name: row.site_name,
            site_url: row.site_url,
        }
    }
}

#[derive(FromRow)]
pub(crate) struct CommentRow {
    pub id: i64,
    pub author: String,
    pub email: String,
    pub body: String,
    pub comic_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            author: row.author,
            email: row.email,
            body: row.body,
            comic_id: row.comic_id,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
pub(crate) struct PostedCommentRow {
    pub id: i64,
    pub comic_id: i64,
    pub site_id: i64,
}

impl From<PostedCommentRow> for PostedComment {
    fn from(row: PostedCommentRow) -> Self {
        PostedComment {
            id: row.id,
            comic_id: row.comic_id,
            site_id: row.site_id,
        }
    }
}
