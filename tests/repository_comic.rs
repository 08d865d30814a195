use chrono::NaiveDate;
use comic_board::domain::entities::{NewComic, NewSite};
use comic_board::domain::repositories::{ComicRepository, SiteRepository};
use comic_board::infrastructure::persistence::{PgComicRepository, PgSiteRepository};
use sqlx::PgPool;
use std::sync::Arc;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

async fn create_site(pool: &Arc<PgPool>, name: &str) -> i64 {
    PgSiteRepository::new(pool.clone())
        .create(NewSite {
            name: name.to_string(),
            url: format!("https://{}.example.com", name.to_lowercase()),
        })
        .await
        .unwrap()
        .id
}

fn new_comic(title: &str, published: &str, site_id: i64) -> NewComic {
    NewComic {
        title: title.to_string(),
        url: format!("https://img.example.com/{}.png", title.to_lowercase()),
        publish_date: date(published),
        site_id,
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_comic(pool: PgPool) {
    let pool = Arc::new(pool);
    let site_id = create_site(&pool, "XKCD").await;
    let repo = PgComicRepository::new(pool);

    let comic = repo
        .create(new_comic("Barrel", "2006-01-01", site_id))
        .await
        .unwrap()
        .unwrap();

    assert!(comic.id > 0);
    assert_eq!(comic.title, "Barrel");
    assert_eq!(comic.publish_date, date("2006-01-01"));
    assert_eq!(comic.site_id, site_id);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_comic_unknown_site(pool: PgPool) {
    let pool = Arc::new(pool);
    let repo = PgComicRepository::new(pool.clone());

    let result = repo
        .create(new_comic("Orphan", "2024-01-01", 999_999))
        .await
        .unwrap();

    assert!(result.is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comics")
        .fetch_one(pool.as_ref())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_by_site_orders_by_publish_date(pool: PgPool) {
    let pool = Arc::new(pool);
    let site_id = create_site(&pool, "XKCD").await;
    let other_id = create_site(&pool, "Other").await;
    let repo = PgComicRepository::new(pool);

    repo.create(new_comic("Third", "2024-03-01", site_id))
        .await
        .unwrap();
    repo.create(new_comic("First", "2024-01-01", site_id))
        .await
        .unwrap();
    repo.create(new_comic("Second", "2024-02-01", site_id))
        .await
        .unwrap();
    repo.create(new_comic("Elsewhere", "2024-01-15", other_id))
        .await
        .unwrap();

    let titles: Vec<String> = repo
        .list_by_site(site_id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.title)
        .collect();

    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_by_unknown_site_is_empty(pool: PgPool) {
    let repo = PgComicRepository::new(Arc::new(pool));

    assert!(repo.list_by_site(999_999).await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_with_site(pool: PgPool) {
    let pool = Arc::new(pool);
    let site_id = create_site(&pool, "XKCD").await;
    let repo = PgComicRepository::new(pool);
    let comic = repo
        .create(new_comic("Barrel", "2006-01-01", site_id))
        .await
        .unwrap()
        .unwrap();

    let found = repo.find_with_site(comic.id).await.unwrap().unwrap();

    assert_eq!(found.id, comic.id);
    assert_eq!(found.site_id, site_id);
    assert_eq!(found.site_name, "XKCD");
    assert_eq!(found.site_url, "https://xkcd.example.com");

    assert!(repo.find_with_site(999_999).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_random_with_site(pool: PgPool) {
    let pool = Arc::new(pool);
    let repo = PgComicRepository::new(pool.clone());

    assert!(repo.random_with_site().await.unwrap().is_none());

    let site_id = create_site(&pool, "XKCD").await;
    let a = repo
        .create(new_comic("A", "2024-01-01", site_id))
        .await
        .unwrap()
        .unwrap();
    let b = repo
        .create(new_comic("B", "2024-01-02", site_id))
        .await
        .unwrap()
        .unwrap();

    for _ in 0..5 {
        let picked = repo.random_with_site().await.unwrap().unwrap();
        assert!(picked.id == a.id || picked.id == b.id);
        assert_eq!(picked.site_name, "XKCD");
    }
}
