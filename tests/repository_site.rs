use comic_board::AppError;
use comic_board::domain::entities::NewSite;
use comic_board::domain::repositories::SiteRepository;
use comic_board::infrastructure::persistence::PgSiteRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_site(name: &str, url: &str) -> NewSite {
    NewSite {
        name: name.to_string(),
        url: url.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_site(pool: PgPool) {
    let repo = PgSiteRepository::new(Arc::new(pool));

    let site = repo
        .create(new_site("XKCD", "https://xkcd.com"))
        .await
        .unwrap();

    assert!(site.id > 0);
    assert_eq!(site.name, "XKCD");
    assert_eq!(site.url, "https://xkcd.com");
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_duplicate_name_conflicts(pool: PgPool) {
    let repo = PgSiteRepository::new(Arc::new(pool));
    repo.create(new_site("XKCD", "https://xkcd.com"))
        .await
        .unwrap();

    let result = repo.create(new_site("XKCD", "https://m.xkcd.com")).await;

    match result {
        Err(AppError::Conflict { details, .. }) => {
            assert_eq!(details["constraint"], "sites_name_key");
        }
        other => panic!("expected conflict, got {other:?}"),
    }
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgSiteRepository::new(Arc::new(pool));
    let created = repo
        .create(new_site("XKCD", "https://xkcd.com"))
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));

    let missing = repo.find_by_id(999_999).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_orders_by_name(pool: PgPool) {
    let repo = PgSiteRepository::new(Arc::new(pool));
    repo.create(new_site("XKCD", "https://xkcd.com"))
        .await
        .unwrap();
    repo.create(new_site("Abstruse Goose", "https://abstrusegoose.com"))
        .await
        .unwrap();
    repo.create(new_site("Dinosaur Comics", "https://qwantz.com"))
        .await
        .unwrap();

    let names: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();

    assert_eq!(names, vec!["Abstruse Goose", "Dinosaur Comics", "XKCD"]);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_empty(pool: PgPool) {
    let repo = PgSiteRepository::new(Arc::new(pool));

    assert!(repo.list().await.unwrap().is_empty());
}
