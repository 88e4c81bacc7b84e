#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use shorturl::api::routes::public_routes;
use shorturl::domain::repositories::{LinkStore, StoreError, StoreResult};
use shorturl::infrastructure::store::MemoryStore;
use shorturl::state::AppState;
use shorturl::utils::id_generator::IdGenerator;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const HOST: &str = "s.example.com";

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), IdGenerator::default());
    (state, store)
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app: Router = public_routes().with_state(state);
    TestServer::new(app).unwrap()
}

/// Encodes `url` through the API and returns the response JSON.
pub async fn encode(server: &TestServer, url: &str) -> serde_json::Value {
    let response = server
        .post("/encode")
        .add_header("Host", HOST)
        .json(&serde_json::json!({ "url": url }))
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()
}

/// Extracts the id from a short URL (its last path segment).
pub fn id_from_short(short: &str) -> String {
    short.rsplit('/').next().unwrap().to_string()
}

/// Store that fails every operation, as if Redis were down.
pub struct UnavailableStore;

#[async_trait]
impl LinkStore for UnavailableStore {
    async fn get(&self, _id: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Pool("connection refused".to_string()))
    }

    async fn set_if_absent(&self, _id: &str, _target: &str) -> StoreResult<bool> {
        Err(StoreError::Pool("connection refused".to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Pool("connection refused".to_string()))
    }
}

/// Store that reports "exists" for the first `collisions` writes, then
/// delegates to an in-memory store.
pub struct CollidingStore {
    inner: MemoryStore,
    collisions: usize,
    attempts: AtomicUsize,
}

impl CollidingStore {
    pub fn new(collisions: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            collisions,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkStore for CollidingStore {
    async fn get(&self, id: &str) -> StoreResult<Option<String>> {
        self.inner.get(id).await
    }

    async fn set_if_absent(&self, id: &str, target: &str) -> StoreResult<bool> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.collisions {
            return Ok(false);
        }
        self.inner.set_if_absent(id, target).await
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
