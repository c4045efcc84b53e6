//! Common test utilities for integration tests.
//!
//! Provides JSON fixtures in the backend's wire shape, URL helpers for the
//! mocked backend and a [`TestContext`] wiring [`Services`] to in-memory
//! doubles.
//!
//! # Example
//!
//! ```ignore
//! let ctx = TestContext::new();
//! ctx.http.set_response(&url("/posts/my"), ok(my_posts(&[1, 2])));
//! let posts = ctx.services.posts.get_my_posts().await.unwrap();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::time::Duration;

use eeum::{ClientConfig, Services};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::watch;

/// Base URL every mocked request goes to.
pub const BASE: &str = "https://eeum.xyz";

/// Token preloaded in the context's token store.
pub const TEST_TOKEN: &str = "test-access-token-12345";

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

/// Ing page URL as the client builds it.
pub fn ing_url(cursor: Option<i64>) -> String {
    scroll_url("ing", cursor)
}

/// Done page URL as the client builds it.
pub fn done_url(cursor: Option<i64>) -> String {
    scroll_url("done", cursor)
}

fn scroll_url(kind: &str, cursor: Option<i64>) -> String {
    match cursor {
        Some(cursor) => url(&format!(
            "/posts/{}/infinite-scroll?pageSize=20&lastPostId={}",
            kind, cursor
        )),
        None => url(&format!("/posts/{}/infinite-scroll?pageSize=20", kind)),
    }
}

/// `{result, data, error}` with `data` set.
pub fn envelope(data: Value) -> String {
    json!({ "result": "SUCCESS", "data": data, "error": null }).to_string()
}

/// Envelope whose `data` is null.
pub fn empty_envelope() -> String {
    json!({ "result": "SUCCESS", "data": null, "error": null }).to_string()
}

pub fn scroll_post(id: i64) -> Value {
    json!({
        "postId": id,
        "title": format!("Story {}", id),
        "content": "A story worth a song",
        "songName": "Song",
        "artistName": "Artist",
        "artworkUrl": "https://artwork",
        "appleMusicUrl": "https://music",
        "createdAt": "2025-12-01T10:00:00",
        "isCompleted": false
    })
}

/// A cursor page holding `ids` in order.
pub fn scroll_page(ids: &[i64]) -> Value {
    Value::Array(ids.iter().map(|id| scroll_post(*id)).collect())
}

pub fn my_posts(ids: &[i64]) -> Value {
    json!({
        "postCount": ids.len(),
        "getMyPostResponses": ids
            .iter()
            .map(|id| json!({ "postId": id, "writerId": 1, "title": format!("Mine {}", id) }))
            .collect::<Vec<_>>()
    })
}

pub fn post_detail(id: i64, is_liked: bool) -> Value {
    json!({
        "postId": id,
        "title": format!("Story {}", id),
        "content": "Full story",
        "songName": "Detail Song",
        "artistName": "Detail Artist",
        "artworkUrl": "https://detail-artwork",
        "appleMusicUrl": "https://detail-music",
        "createdAt": "2025-12-01T10:00:00",
        "isLiked": is_liked,
        "comments": []
    })
}

pub fn music(song: &str, artwork: &str) -> Value {
    json!({
        "albumName": "Album",
        "songName": song,
        "artistName": "Artist",
        "artworkUrl": artwork,
        "previewMusicUrl": "https://preview"
    })
}

/// Services wired to a recording HTTP mock and an in-memory token store.
pub struct TestContext {
    pub http: MockHttpClient,
    pub tokens: InMemoryTokenStore,
    pub services: Services,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_tokens(InMemoryTokenStore::with_token(TEST_TOKEN))
    }

    pub fn with_tokens(tokens: InMemoryTokenStore) -> Self {
        let http = MockHttpClient::new();
        let services = Services::new(
            ClientConfig::default().with_base_url(BASE),
            Arc::new(http.clone()),
            Arc::new(tokens.clone()),
        );
        Self {
            http,
            tokens,
            services,
        }
    }
}

/// Wait until `predicate` holds for the published state.
pub async fn wait_for_state<T, F>(rx: &mut watch::Receiver<T>, predicate: F) -> T
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let state = tokio::time::timeout(Duration::from_secs(2), rx.wait_for(predicate))
        .await
        .expect("timed out waiting for state")
        .expect("state channel closed");
    state.clone()
}
