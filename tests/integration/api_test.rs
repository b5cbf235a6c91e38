// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{
    create_test_app, feed_item, feed_response, mount_all_empty, mount_feed, mount_reddit,
    mount_standin_feed, reddit_listing, reddit_post,
};
use memehub::domain::models::meme::MemeCandidate;
use std::collections::HashSet;

const VIDEO_EXTENSIONS: [&str; 2] = [".mp4", ".webm"];
const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".webp", ".gif"];

fn assert_candidate_invariants(memes: &[MemeCandidate]) {
    let mut seen = HashSet::new();
    for meme in memes {
        assert!(!meme.id.is_empty());
        assert!(seen.insert(&meme.id), "duplicate id {}", meme.id);
        assert!(meme.title.chars().count() <= 100);
        assert!(!meme.media_url.is_empty());

        let url = meme.media_url.to_ascii_lowercase();
        if meme.is_video {
            assert!(
                VIDEO_EXTENSIONS.iter().any(|ext| url.ends_with(ext)),
                "video candidate without video extension: {url}"
            );
        } else {
            assert!(
                IMAGE_EXTENSIONS.iter().any(|ext| url.ends_with(ext)),
                "image candidate without image extension: {url}"
            );
        }
    }
}

#[tokio::test]
async fn memes_endpoint_returns_merged_candidates() {
    let app = create_test_app().await;

    mount_reddit(
        &app.reddit_server,
        "memes",
        reddit_listing(vec![
            reddit_post("aaa111", "one", 1000, "https://i.redd.it/a.jpg"),
            reddit_post("bbb222", "two", 50, "https://i.redd.it/b.gifv"),
        ]),
    )
    .await;
    mount_feed(
        &app.feed_server,
        feed_response(vec![feed_item(
            "https://redd.it/ccc333",
            "three",
            800,
            "https://i.imgur.com/c.jpg",
        )]),
    )
    .await;
    mount_standin_feed(&app.feed_server, feed_response(vec![])).await;

    let response = app.server.get("/api/memes").await;
    response.assert_status_ok();

    let memes: Vec<MemeCandidate> = response.json();
    assert_eq!(memes.len(), 3);
    assert!(memes.len() <= 120);
    assert_candidate_invariants(&memes);

    // The gifv post went through the mp4 rewrite.
    let gifv = memes.iter().find(|m| m.id == "reddit_bbb222").expect("gifv post");
    assert!(gifv.is_video);
    assert!(gifv.media_url.ends_with(".mp4"));
}

#[tokio::test]
async fn memes_endpoint_answers_200_with_empty_pool() {
    let app = create_test_app().await;
    mount_all_empty(&app.reddit_server, &app.feed_server).await;

    let response = app.server.get("/api/memes").await;
    response.assert_status_ok();

    let memes: Vec<MemeCandidate> = response.json();
    assert!(memes.is_empty());
}

#[tokio::test]
async fn trending_endpoint_applies_popularity_threshold() {
    let app = create_test_app().await;

    mount_reddit(
        &app.reddit_server,
        "memes",
        reddit_listing(vec![
            reddit_post("hot111", "hot", 5000, "https://i.redd.it/hot.jpg"),
            reddit_post("meh222", "meh", 12, "https://i.redd.it/meh.jpg"),
            reddit_post("edge33", "edge", 500, "https://i.redd.it/edge.jpg"),
        ]),
    )
    .await;
    mount_feed(&app.feed_server, feed_response(vec![])).await;
    mount_standin_feed(&app.feed_server, feed_response(vec![])).await;

    let response = app.server.get("/api/trending-memes").await;
    response.assert_status_ok();

    let memes: Vec<MemeCandidate> = response.json();
    assert_eq!(memes.len(), 1);
    assert_eq!(memes[0].id, "reddit_hot111");
    assert!(memes.iter().all(|m| m.upvote_count > 500));
    assert!(memes.len() <= 50);
}

#[tokio::test]
async fn trending_endpoint_answers_200_when_nothing_trends() {
    let app = create_test_app().await;
    mount_all_empty(&app.reddit_server, &app.feed_server).await;

    let response = app.server.get("/api/trending-memes").await;
    response.assert_status_ok();

    let memes: Vec<MemeCandidate> = response.json();
    assert!(memes.is_empty());
}

#[tokio::test]
async fn source_endpoint_serves_one_registered_source() {
    let app = create_test_app().await;

    mount_reddit(
        &app.reddit_server,
        "memes",
        reddit_listing(vec![reddit_post(
            "solo11",
            "just reddit",
            42,
            "https://i.redd.it/solo.png",
        )]),
    )
    .await;

    let response = app.server.get("/api/memes/source/reddit").await;
    response.assert_status_ok();

    let memes: Vec<MemeCandidate> = response.json();
    assert_eq!(memes.len(), 1);
    assert_eq!(memes[0].source_label, "Reddit (r/memes)");
}

#[tokio::test]
async fn unknown_source_name_is_a_bad_request() {
    let app = create_test_app().await;

    let response = app.server.get("/api/memes/source/myspace").await;
    response.assert_status_bad_request();

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("myspace"));
}

#[tokio::test]
async fn health_and_version_respond() {
    let app = create_test_app().await;

    let health = app.server.get("/health").await;
    health.assert_status_ok();
    health.assert_text("OK");

    let version = app.server.get("/v1/version").await;
    version.assert_status_ok();
}
