//! DTOs for the random comic endpoint.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::ComicWithSite;

/// A comic together with the site that publishes it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomComicResponse {
    pub comic_id: i64,
    pub comic_title: String,
    pub comic_url: String,
    pub comic_date: NaiveDate,
    pub comic_site_id: i64,
    pub comic_site_name: String,
    pub comic_site_url: String,
}

impl From<ComicWithSite> for RandomComicResponse {
    fn from(c: ComicWithSite) -> Self {
        Self {
            comic_id: c.id,
            comic_title: c.title,
            comic_url: c.url,
            comic_date: c.publish_date,
            comic_site_id: c.site_id,
            comic_site_name: c.site_name,
            comic_site_url: c.site_url,
        }
    }
}
