#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{NaiveDate, Utc};
use comic_board::domain::entities::{
    Comic, ComicWithSite, Comment, NewComic, NewComment, NewSite, PostedComment, Site,
};
use comic_board::domain::repositories::{
    ComicRepository, CommentRepository, SiteRepository, StatusRepository,
};
use comic_board::error::AppError;
use comic_board::routes::build_router;
use comic_board::state::AppState;
use rand::seq::IndexedRandom;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the PostgreSQL store.
///
/// Mirrors the SQL semantics the handlers rely on: name ordering for sites,
/// publish-date ordering for comics, insertion ordering for comments, and
/// insert-only-if-parent-exists for comics and comments.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    sites: Vec<Site>,
    comics: Vec<Comic>,
    comments: Vec<Comment>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn site(&self, id: i64) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == id)
    }

    fn joined(&self, comic: &Comic) -> Option<ComicWithSite> {
        self.site(comic.site_id)
            .map(|site| ComicWithSite::from_parts(comic.clone(), site))
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_site(&self, name: &str, url: &str) -> i64 {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        t.sites.push(Site::new(id, name.to_string(), url.to_string()));
        id
    }

    pub fn add_comic(&self, title: &str, url: &str, published: &str, site_id: i64) -> i64 {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        t.comics.push(Comic::new(
            id,
            title.to_string(),
            url.to_string(),
            date(published),
            site_id,
        ));
        id
    }

    pub fn add_comment(&self, comic_id: i64, author: &str, body: &str) -> i64 {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        t.comments.push(Comment {
            id,
            author: author.to_string(),
            email: format!("{author}@example.com"),
            body: body.to_string(),
            comic_id,
            created_at: Utc::now(),
        });
        id
    }

    pub fn comic_count(&self) -> usize {
        self.tables.lock().unwrap().comics.len()
    }

    pub fn comment_count(&self) -> usize {
        self.tables.lock().unwrap().comments.len()
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.tables.lock().unwrap().comments.clone()
    }
}

#[async_trait]
impl SiteRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Site>, AppError> {
        let mut sites = self.tables.lock().unwrap().sites.clone();
        sites.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(sites)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Site>, AppError> {
        Ok(self.tables.lock().unwrap().site(id).cloned())
    }

    async fn create(&self, new_site: NewSite) -> Result<Site, AppError> {
        let id = self.add_site(&new_site.name, &new_site.url);
        Ok(Site::new(id, new_site.name, new_site.url))
    }
}

#[async_trait]
impl ComicRepository for InMemoryStore {
    async fn random_with_site(&self) -> Result<Option<ComicWithSite>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.comics
            .choose(&mut rand::rng())
            .and_then(|comic| t.joined(comic)))
    }

    async fn list_by_site(&self, site_id: i64) -> Result<Vec<Comic>, AppError> {
        let mut comics: Vec<Comic> = self
            .tables
            .lock()
            .unwrap()
            .comics
            .iter()
            .filter(|c| c.site_id == site_id)
            .cloned()
            .collect();
        comics.sort_by(|a, b| a.publish_date.cmp(&b.publish_date).then(a.id.cmp(&b.id)));
        Ok(comics)
    }

    async fn find_with_site(&self, id: i64) -> Result<Option<ComicWithSite>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t.comics
            .iter()
            .find(|c| c.id == id)
            .and_then(|comic| t.joined(comic)))
    }

    async fn create(&self, new_comic: NewComic) -> Result<Option<Comic>, AppError> {
        let mut t = self.tables.lock().unwrap();
        if t.site(new_comic.site_id).is_none() {
            return Ok(None);
        }

        let id = t.next_id();
        let comic = Comic::new(
            id,
            new_comic.title,
            new_comic.url,
            new_comic.publish_date,
            new_comic.site_id,
        );
        t.comics.push(comic.clone());
        Ok(Some(comic))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_by_comic(&self, comic_id: i64) -> Result<Vec<Comment>, AppError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .comments
            .iter()
            .filter(|c| c.comic_id == comic_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new_comment: NewComment) -> Result<Option<PostedComment>, AppError> {
        let mut t = self.tables.lock().unwrap();
        let Some(site_id) = t
            .comics
            .iter()
            .find(|c| c.id == new_comment.comic_id)
            .map(|c| c.site_id)
        else {
            return Ok(None);
        };

        let id = t.next_id();
        t.comments.push(Comment {
            id,
            author: new_comment.author,
            email: new_comment.email,
            body: new_comment.body,
            comic_id: new_comment.comic_id,
            created_at: Utc::now(),
        });

        Ok(Some(PostedComment {
            id,
            comic_id: new_comment.comic_id,
            site_id,
        }))
    }
}

#[async_trait]
impl StatusRepository for InMemoryStore {
    async fn current_date(&self) -> Result<NaiveDate, AppError> {
        Ok(Utc::now().date_naive())
    }
}

/// Store whose every call fails like an unreachable database.
pub struct FailingStore;

fn store_down() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl SiteRepository for FailingStore {
    async fn list(&self) -> Result<Vec<Site>, AppError> {
        Err(store_down())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Site>, AppError> {
        Err(store_down())
    }

    async fn create(&self, _new_site: NewSite) -> Result<Site, AppError> {
        Err(store_down())
    }
}

#[async_trait]
impl ComicRepository for FailingStore {
    async fn random_with_site(&self) -> Result<Option<ComicWithSite>, AppError> {
        Err(store_down())
    }

    async fn list_by_site(&self, _site_id: i64) -> Result<Vec<Comic>, AppError> {
        Err(store_down())
    }

    async fn find_with_site(&self, _id: i64) -> Result<Option<ComicWithSite>, AppError> {
        Err(store_down())
    }

    async fn create(&self, _new_comic: NewComic) -> Result<Option<Comic>, AppError> {
        Err(store_down())
    }
}

#[async_trait]
impl CommentRepository for FailingStore {
    async fn list_by_comic(&self, _comic_id: i64) -> Result<Vec<Comment>, AppError> {
        Err(store_down())
    }

    async fn create(&self, _new_comment: NewComment) -> Result<Option<PostedComment>, AppError> {
        Err(store_down())
    }
}

#[async_trait]
impl StatusRepository for FailingStore {
    async fn current_date(&self) -> Result<NaiveDate, AppError> {
        Err(store_down())
    }
}

pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    AppState::new(store.clone(), store.clone(), store.clone(), store)
}

pub fn create_failing_state() -> AppState {
    let store = Arc::new(FailingStore);
    AppState::new(store.clone(), store.clone(), store.clone(), store)
}

pub fn make_server(store: Arc<InMemoryStore>) -> TestServer {
    TestServer::new(build_router(create_test_state(store), "public")).unwrap()
}

pub fn make_failing_server() -> TestServer {
    TestServer::new(build_router(create_failing_state(), "public")).unwrap()
}
