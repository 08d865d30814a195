//! Field validators used by form records and services.
//!
//! Each function follows the `validator` crate's custom-validator shape so it
//! can be referenced from `#[validate(custom(function = "..."))]`.

use chrono::NaiveDate;
use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Maximum accepted length of an image or site URL.
pub const MAX_URL_LEN: usize = 2048;

/// Requires an absolute `http` or `https` URL with a host.
///
/// Rejects `javascript:`, `data:`, `file:` and relative references, so stored
/// URLs are always safe to place in `src`/`href` attributes.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_URL_LEN {
        return Err(error("url_too_long", "URL is too long"));
    }

    let parsed = Url::parse(value).map_err(|_| error("url", "Invalid URL format"))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        "http" | "https" => Err(error("url", "URL must include a host")),
        _ => Err(error(
            "url_scheme",
            "Only http:// and https:// URLs are allowed",
        )),
    }
}

/// Rejects values made only of whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "Must not be blank"));
    }
    Ok(())
}

/// Parses a calendar date written exactly as `YYYY-MM-DD`.
///
/// Unlike `NaiveDate`'s own parser this rejects signed or extended years and
/// unpadded fields; the year is limited to `0001..=9999`, which PostgreSQL
/// `DATE` columns always accept.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shaped || value.starts_with("0000") {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
