//! Shared helpers for the HTTP integration tests.
//!
//! Requests go straight into the router via `tower::ServiceExt::oneshot`,
//! backed by [`MockStore`] instead of Postgres.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bestiary_api::config::ServerConfig;
use bestiary_api::router::build_app_router;
use bestiary_api::state::AppState;
use bestiary_core::types::DbId;
use bestiary_db::models::family::{CreateFamily, MonsterFamily, UpdateFamily};
use bestiary_db::models::monster::{CreateMonster, Monster, UpdateMonster};
use bestiary_db::store::BestiaryStore;

// ---------------------------------------------------------------------------
// Mock store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tables {
    families: BTreeMap<DbId, MonsterFamily>,
    monsters: BTreeMap<DbId, Monster>,
    next_family_id: DbId,
    next_monster_id: DbId,
}

/// In-memory [`BestiaryStore`] that counts every call.
///
/// Mirrors the Postgres behaviour the handlers rely on: generated ids and
/// coalescing updates. Foreign keys are not modelled; the repository tests
/// in `bestiary-db` cover them against Postgres.
#[derive(Default)]
pub struct MockStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
    failing: AtomicBool,
    list_delay: Option<Duration>,
}

impl MockStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A store whose every call fails as if the database were unreachable.
    pub fn failing() -> Arc<Self> {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        Arc::new(store)
    }

    /// A store whose `list_families` sleeps for `delay` before answering.
    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            list_delay: Some(delay),
            ..Self::default()
        })
    }

    /// Number of store calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn family_count(&self) -> usize {
        self.tables.lock().unwrap().families.len()
    }

    pub fn monster_count(&self) -> usize {
        self.tables.lock().unwrap().monsters.len()
    }

    fn enter(&self) -> Result<std::sync::MutexGuard<'_, Tables>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(self.tables.lock().unwrap())
    }
}

#[async_trait]
impl BestiaryStore for MockStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.enter().map(|_| ())
    }

    async fn list_families(&self) -> Result<Vec<MonsterFamily>, sqlx::Error> {
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.enter()?.families.values().cloned().collect())
    }

    async fn find_family(&self, id: DbId) -> Result<Option<MonsterFamily>, sqlx::Error> {
        Ok(self.enter()?.families.get(&id).cloned())
    }

    async fn create_family(&self, input: &CreateFamily) -> Result<DbId, sqlx::Error> {
        let mut tables = self.enter()?;
        tables.next_family_id += 1;
        let family_id = tables.next_family_id;
        tables.families.insert(
            family_id,
            MonsterFamily {
                family_id,
                family_name: input.name.clone().unwrap_or_default(),
                family_description: input.description.clone(),
            },
        );
        Ok(family_id)
    }

    async fn update_family(
        &self,
        id: DbId,
        input: &UpdateFamily,
    ) -> Result<Option<MonsterFamily>, sqlx::Error> {
        let mut tables = self.enter()?;
        Ok(tables.families.get_mut(&id).map(|family| {
            if let Some(name) = &input.name {
                family.family_name = name.clone();
            }
            if let Some(description) = &input.description {
                family.family_description = Some(description.clone());
            }
            family.clone()
        }))
    }

    async fn delete_family(&self, id: DbId) -> Result<Option<MonsterFamily>, sqlx::Error> {
        Ok(self.enter()?.families.remove(&id))
    }

    async fn list_monsters(&self) -> Result<Vec<Monster>, sqlx::Error> {
        Ok(self.enter()?.monsters.values().cloned().collect())
    }

    async fn find_monster(&self, id: DbId) -> Result<Option<Monster>, sqlx::Error> {
        Ok(self.enter()?.monsters.get(&id).cloned())
    }

    async fn create_monster(&self, input: &CreateMonster) -> Result<DbId, sqlx::Error> {
        let mut tables = self.enter()?;
        tables.next_monster_id += 1;
        let monster_id = tables.next_monster_id;
        tables.monsters.insert(
            monster_id,
            Monster {
                monster_id,
                name: input.name.clone().unwrap_or_default(),
                description: input.description.clone(),
                power_level: input.power_level,
                image_url: input.image_url.clone(),
                habitat: input.habitat.clone(),
                family_id: input.family_id,
                is_legendary: input.is_legendary,
            },
        );
        Ok(monster_id)
    }

    async fn update_monster(
        &self,
        id: DbId,
        input: &UpdateMonster,
    ) -> Result<Option<Monster>, sqlx::Error> {
        let mut tables = self.enter()?;
        Ok(tables.monsters.get_mut(&id).map(|monster| {
            if let Some(name) = &input.name {
                monster.name = name.clone();
            }
            if input.description.is_some() {
                monster.description = input.description.clone();
            }
            if input.power_level.is_some() {
                monster.power_level = input.power_level;
            }
            if input.image_url.is_some() {
                monster.image_url = input.image_url.clone();
            }
            if input.habitat.is_some() {
                monster.habitat = input.habitat.clone();
            }
            if input.family_id.is_some() {
                monster.family_id = input.family_id;
            }
            if input.is_legendary.is_some() {
                monster.is_legendary = input.is_legendary;
            }
            monster.clone()
        }))
    }

    async fn delete_monster(&self, id: DbId) -> Result<Option<Monster>, sqlx::Error> {
        Ok(self.enter()?.monsters.remove(&id))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".parse().unwrap()],
        schema_init_timeout_secs: 10,
    }
}

/// Build the full application router over `store`, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<MockStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::POST, uri, &body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_raw(app, Method::PUT, uri, &body.to_string()).await
}

/// Send `body` verbatim with a JSON content type, valid or not.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> axum::body::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

/// POST a family and return its generated id, asserting 201.
pub async fn create_family(app: &Router, body: serde_json::Value) -> i64 {
    let response = post_json(app.clone(), "/monsterfamilies", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["familyId"].as_i64().unwrap()
}

/// POST a monster and return its generated id, asserting 201.
pub async fn create_monster(app: &Router, body: serde_json::Value) -> i64 {
    let response = post_json(app.clone(), "/monsters", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["monsterId"].as_i64().unwrap()
}
