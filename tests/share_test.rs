//! Story sharing through the use case and the composer view-model.

mod common;

use common::*;
use eeum::models::{CompletionType, Music};
use eeum::usecase::ShareRequest;
use eeum::view_model::{EMPTY_STORY_MESSAGE, EMPTY_TITLE_MESSAGE, MAX_STORY_CHARACTERS};
use serde_json::json;

fn posted_body(ctx: &TestContext) -> serde_json::Value {
    let requests = ctx.http.requests_to("POST", &url("/posts"));
    assert_eq!(requests.len(), 1);
    requests[0].json_body().unwrap()
}

#[tokio::test]
async fn test_share_without_music_sends_description_as_album() {
    let ctx = TestContext::new();
    ctx.http.set_response(&url("/posts"), ok_empty());

    ctx.services
        .share_use_case()
        .share_story(ShareRequest {
            title: "T".to_string(),
            description: "D".to_string(),
            story: "S".to_string(),
            ..ShareRequest::default()
        })
        .await
        .unwrap();

    assert_eq!(
        posted_body(&ctx),
        json!({
            "title": "T",
            "content": "S",
            "albumName": "D",
            "songName": "",
            "artistName": "",
            "artworkUrl": "",
            "appleMusicUrl": "",
            "completionType": "MANUAL_COMPLETION",
            "commentCountLimit": 0
        })
    );
}

#[tokio::test]
async fn test_share_failure_is_returned() {
    let ctx = TestContext::new();
    ctx.http.set_response(&url("/posts"), status(500, "down"));

    let result = ctx
        .services
        .share_use_case()
        .share_story(ShareRequest::default())
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_composer_validates_before_sending() {
    let ctx = TestContext::new();
    let vm = ctx.services.share_view_model();

    assert!(!vm.share_story().await);
    assert_eq!(vm.state().error_message.as_deref(), Some(EMPTY_TITLE_MESSAGE));

    vm.set_title("Title");
    assert!(!vm.share_story().await);
    assert_eq!(vm.state().error_message.as_deref(), Some(EMPTY_STORY_MESSAGE));

    assert!(ctx.http.get_requests().is_empty());
}

#[tokio::test]
async fn test_composer_truncates_story() {
    let ctx = TestContext::new();
    let vm = ctx.services.share_view_model();

    vm.set_story(&"가".repeat(MAX_STORY_CHARACTERS + 10));

    assert_eq!(vm.state().story.chars().count(), MAX_STORY_CHARACTERS);
}

#[tokio::test]
async fn test_composer_shares_with_music_and_auto_completion() {
    let ctx = TestContext::new();
    ctx.http.set_response(&url("/posts"), ok_empty());
    let vm = ctx.services.share_view_model();
    vm.set_title("Night drive");
    vm.set_description("ignored when a song is attached");
    vm.set_story("Windows down");
    vm.select_music(Music {
        album_name: "Album".to_string(),
        song_name: "Song".to_string(),
        artist_name: "Artist".to_string(),
        artwork_url: "https://artwork".to_string(),
        preview_music_url: "https://preview".to_string(),
    });

    assert!(vm.confirm_settings(CompletionType::Auto, 30).await);

    let body = posted_body(&ctx);
    assert_eq!(body["albumName"], json!("Album"));
    assert_eq!(body["songName"], json!("Song"));
    assert_eq!(body["appleMusicUrl"], json!("https://preview"));
    assert_eq!(body["completionType"], json!("AUTO_COMPLETION"));
    assert_eq!(body["commentCountLimit"], json!(30));

    let state = vm.state();
    assert!(state.did_share_successfully);
    assert!(!state.is_sharing);
    vm.close_complete_view();
    assert!(!vm.state().did_share_successfully);
}

#[tokio::test]
async fn test_manual_completion_sends_no_limit() {
    let ctx = TestContext::new();
    ctx.http.set_response(&url("/posts"), ok_empty());
    let vm = ctx.services.share_view_model();
    vm.set_title("T");
    vm.set_story("S");

    assert!(vm.confirm_settings(CompletionType::Manual, 50).await);

    assert_eq!(posted_body(&ctx)["commentCountLimit"], json!(0));
}

#[tokio::test]
async fn test_composer_failure_shows_message() {
    let ctx = TestContext::new();
    ctx.http.set_response(&url("/posts"), status(500, "down"));
    let vm = ctx.services.share_view_model();
    vm.set_title("T");
    vm.set_story("S");

    assert!(!vm.share_story().await);

    let state = vm.state();
    assert!(!state.did_share_successfully);
    assert!(!state.is_sharing);
    assert!(state.error_message.is_some());
}
