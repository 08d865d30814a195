//! Form records submitted by the add-comic and add-comment pages.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de};
use validator::Validate;

use crate::domain::entities::{NewComic, NewComment};
use crate::utils::validation::{parse_iso_date, validate_http_url, validate_not_blank};

/// Body of `POST /addComic`.
///
/// Field names match the page's form inputs.
#[derive(Debug, Deserialize, Validate)]
pub struct AddComicForm {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub title: String,

    /// Image URL.
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,

    /// `YYYY-MM-DD`
    #[serde(rename = "publishDate", deserialize_with = "deserialize_iso_date")]
    pub publish_date: NaiveDate,

    pub site_id: i64,
}

fn deserialize_iso_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    parse_iso_date(&raw)
        .ok_or_else(|| de::Error::custom("publishDate must be a date in YYYY-MM-DD format"))
}

impl AddComicForm {
    pub fn into_new_comic(self) -> NewComic {
        NewComic {
            title: self.title.trim().to_string(),
            url: self.url.trim().to_string(),
            publish_date: self.publish_date,
            site_id: self.site_id,
        }
    }
}

/// Body of `POST /addComment/{comic_id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCommentForm {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub username: String,

    #[validate(email, length(max = 254))]
    pub email: String,

    #[validate(length(min = 1, max = 5000), custom(function = "validate_not_blank"))]
    pub comment: String,
}

impl AddCommentForm {
    pub fn into_new_comment(self, comic_id: i64) -> NewComment {
        NewComment {
            author: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            body: self.comment.trim().to_string(),
            comic_id,
        }
    }
}
