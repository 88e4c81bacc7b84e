mod common;

use serde_json::json;
use shorturl::state::AppState;
use shorturl::utils::id_generator::{DEFAULT_ALPHABET, IdGenerator};
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_encode_success() {
    let (state, store) = common::create_test_state();
    let server = common::create_test_server(state);

    let json = common::encode(&server, "https://example.com/").await;

    assert_eq!(json["url"], "https://example.com/");
    let short = json["short"].as_str().unwrap();
    assert!(short.starts_with("http://s.example.com/"));

    let id = common::id_from_short(short);
    assert_eq!(id.len(), 8);
    assert!(id.chars().all(|c| DEFAULT_ALPHABET.contains(c)));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_encode_short_uses_forwarded_proto() {
    let (state, _store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/encode")
        .add_header("Host", "sho.rt:8443")
        .add_header("X-Forwarded-Proto", "https")
        .json(&json!({ "url": "http://example.com/page" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert!(json["short"].as_str().unwrap().starts_with("https://sho.rt:8443/"));
}

#[tokio::test]
async fn test_encode_same_url_twice_gives_distinct_ids() {
    let (state, store) = common::create_test_state();
    let server = common::create_test_server(state);

    let first = common::encode(&server, "https://example.com/same").await;
    let second = common::encode(&server, "https://example.com/same").await;

    assert_ne!(first["short"], second["short"]);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_encode_many_ids_are_unique() {
    let (state, _store) = common::create_test_state();
    let server = common::create_test_server(state);

    let mut ids = HashSet::new();
    for i in 0..50 {
        let json = common::encode(&server, &format!("https://example.com/{i}")).await;
        ids.insert(common::id_from_short(json["short"].as_str().unwrap()));
    }

    assert_eq!(ids.len(), 50);
}

#[tokio::test]
async fn test_encode_rejects_ftp() {
    let (state, store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/encode")
        .add_header("Host", common::HOST)
        .json(&json!({ "url": "ftp://example.com/" }))
        .await;

    assert_eq!(response.status_code(), 422);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_encode_rejects_non_http_inputs() {
    let (state, store) = common::create_test_state();
    let server = common::create_test_server(state);

    for bad in [
        "example.com",
        "javascript:alert(1)",
        "mailto:someone@example.com",
        "",
        " https://example.com",
        "https://example.com/x ",
        "http://",
    ] {
        let response = server
            .post("/encode")
            .add_header("Host", common::HOST)
            .json(&json!({ "url": bad }))
            .await;

        assert_eq!(response.status_code(), 422, "input {bad:?} was accepted");
    }

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_encode_missing_url_field() {
    let (state, _store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/encode")
        .add_header("Host", common::HOST)
        .json(&json!({ "link": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 422);
}

#[tokio::test]
async fn test_encode_malformed_json() {
    let (state, _store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/encode")
        .add_header("Host", common::HOST)
        .add_header("Content-Type", "application/json")
        .text("{\"url\": ")
        .await;

    assert_eq!(response.status_code(), 422);
}

#[tokio::test]
async fn test_encode_retries_on_collision() {
    let store = Arc::new(common::CollidingStore::new(2));
    let state = AppState::new(store.clone(), IdGenerator::default());
    let server = common::create_test_server(state);

    let json = common::encode(&server, "https://example.com/retry").await;

    assert_eq!(json["url"], "https://example.com/retry");
    assert_eq!(store.attempts(), 3);
}

#[tokio::test]
async fn test_encode_id_space_exhausted() {
    let store = Arc::new(common::CollidingStore::new(usize::MAX));
    let generator = IdGenerator::new(DEFAULT_ALPHABET, 8, Some(4)).unwrap();
    let state = AppState::new(store.clone(), generator);
    let server = common::create_test_server(state);

    let response = server
        .post("/encode")
        .add_header("Host", common::HOST)
        .json(&json!({ "url": "https://example.com/" }))
        .await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "id_space_exhausted");
    assert_eq!(store.attempts(), 4);
}

#[tokio::test]
async fn test_encode_store_unavailable() {
    let state = AppState::new(Arc::new(common::UnavailableStore), IdGenerator::default());
    let server = common::create_test_server(state);

    let response = server
        .post("/encode")
        .add_header("Host", common::HOST)
        .json(&json!({ "url": "https://example.com/" }))
        .await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "store_unavailable");
}

#[tokio::test]
async fn test_encode_custom_alphabet_and_length() {
    let store = Arc::new(shorturl::infrastructure::store::MemoryStore::new());
    let generator = IdGenerator::new("abcdef", 12, Some(10)).unwrap();
    let state = AppState::new(store, generator);
    let server = common::create_test_server(state);

    let json = common::encode(&server, "https://example.com/").await;
    let id = common::id_from_short(json["short"].as_str().unwrap());

    assert_eq!(id.len(), 12);
    assert!(id.chars().all(|c| "abcdef".contains(c)));
}
