mod common;

use common::*;
use serde_json::json;

fn search_url(term: &str) -> String {
    url(&format!("/apple-music/search?term={}&types=songs&limit=20", term))
}

#[tokio::test]
async fn test_search_keeps_first_of_each_song() {
    let ctx = TestContext::new();
    ctx.http.set_response(
        &search_url("blue"),
        ok(json!([
            music("Blue in Green", "https://first"),
            music("So What", "https://a"),
            music("Blue in Green", "https://second")
        ])),
    );
    let vm = ctx.services.music_search_view_model();

    vm.search("  blue ").await;

    let state = vm.state();
    assert_eq!(state.query, "blue");
    assert!(!state.is_searching);
    assert_eq!(state.results.len(), 2);
    assert_eq!(state.results[0].artwork_url, "https://first");
    assert_eq!(state.results[1].song_name, "So What");
}

#[tokio::test]
async fn test_blank_query_is_ignored() {
    let ctx = TestContext::new();
    let vm = ctx.services.music_search_view_model();

    vm.search("   ").await;

    assert!(ctx.http.get_requests().is_empty());
    assert_eq!(vm.state().query, "");
}

#[tokio::test]
async fn test_failed_search_keeps_previous_results() {
    let ctx = TestContext::new();
    ctx.http
        .set_response(&search_url("blue"), ok(json!([music("Blue in Green", "https://a")])));
    ctx.http.set_response(&search_url("red"), status(500, "down"));
    let vm = ctx.services.music_search_view_model();

    vm.search("blue").await;
    vm.search("red").await;

    let state = vm.state();
    assert_eq!(state.query, "red");
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].song_name, "Blue in Green");
    assert!(!state.is_searching);
}
