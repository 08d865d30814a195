//! Domain entities for comics.

use chrono::NaiveDate;

use super::Site;

/// A single published strip.
///
/// Within a site, comics are displayed by ascending `publish_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comic {
    pub id: i64,
    pub title: String,
    /// Image URL.
    pub url: String,
    pub publish_date: NaiveDate,
    pub site_id: i64,
}

impl Comic {
    pub fn new(id: i64, title: String, url: String, publish_date: NaiveDate, site_id: i64) -> Self {
        Self {
            id,
            title,
            url,
            publish_date,
            site_id,
        }
    }
}

/// A comic joined with the site that publishes it.
///
/// Used by the home page, the random comic API and the comment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicWithSite {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub publish_date: NaiveDate,
    pub site_id: i64,
    pub site_name: String,
    pub site_url: String,
}

impl ComicWithSite {
    /// Joins a comic with its owning site.
    pub fn from_parts(comic: Comic, site: &Site) -> Self {
        Self {
            id: comic.id,
            title: comic.title,
            url: comic.url,
            publish_date: comic.publish_date,
            site_id: comic.site_id,
            site_name: site.name.clone(),
            site_url: site.url.clone(),
        }
    }
}

/// Input data for creating a new comic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComic {
    pub title: String,
    pub url: String,
    pub publish_date: NaiveDate,
    pub site_id: i64,
}
