//! Handler for the random comic widget.

use axum::{Json, extract::State};

use crate::api::dto::comic::RandomComicResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns one comic picked uniformly at random.
///
/// # Endpoint
///
/// `GET /api/randomComic`
///
/// # Response
///
/// ```json
/// {
///   "comicId": 12,
///   "comicTitle": "Barrel",
///   "comicUrl": "https://imgs.xkcd.com/comics/barrel_cropped_(1).jpg",
///   "comicDate": "2006-01-01",
///   "comicSiteId": 1,
///   "comicSiteName": "XKCD",
///   "comicSiteUrl": "https://xkcd.com"
/// }
/// ```
///
/// The body is `null` when no comics exist.
pub async fn random_comic_handler(
    State(state): State<AppState>,
) -> Result<Json<Option<RandomComicResponse>>, AppError> {
    let comic = state.comic_service.random_comic().await?;

    Ok(Json(comic.map(RandomComicResponse::from)))
}
