// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use memehub::config::settings::{
    AggregatorSettings, SelectionSettings, ServerSettings, Settings, SourceSettings,
    StandinFeedSettings,
};
use memehub::infrastructure::aggregation::{AggregatorConfig, MemeAggregator};
use memehub::infrastructure::sources::create_sources;
use memehub::presentation::routes;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub reddit_server: MockServer,
    pub feed_server: MockServer,
}

/// Settings wired to the two mock upstreams: one subreddit, the
/// meme-api batch feed, and a single "9gag" stand-in feed.
pub fn test_settings(reddit_url: &str, feed_url: &str) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        sources: SourceSettings {
            reddit_base_url: reddit_url.to_string(),
            meme_api_base_url: feed_url.to_string(),
            subreddits: vec!["memes".to_string()],
            posts_per_subreddit: 20,
            meme_api_count: 30,
            reddit_timeout_secs: 1,
            meme_api_timeout_secs: 1,
            standin_timeout_secs: 1,
            standin_feeds: Some(vec![StandinFeedSettings {
                name: "9gag".to_string(),
                feed: "dankmemes".to_string(),
                label: "9GAG".to_string(),
            }]),
        },
        aggregator: AggregatorSettings {
            max_concurrent: 6,
            global_deadline_secs: 10,
            failure_threshold: 3,
        },
        selection: SelectionSettings {
            memes_cap: 120,
            trending_cap: 50,
            trending_min_upvotes: 500,
        },
    }
}

pub fn build_aggregator(settings: &Settings) -> MemeAggregator {
    let sources = create_sources(&settings.sources).expect("sources should build");
    MemeAggregator::new(sources, AggregatorConfig::from(&settings.aggregator))
}

pub async fn create_test_app() -> TestApp {
    let reddit_server = MockServer::start().await;
    let feed_server = MockServer::start().await;

    let settings = Arc::new(test_settings(&reddit_server.uri(), &feed_server.uri()));
    let aggregator = Arc::new(build_aggregator(&settings));
    let app = routes::routes(aggregator, settings);

    TestApp {
        server: TestServer::new(app).expect("test server should start"),
        reddit_server,
        feed_server,
    }
}

pub fn reddit_post(id: &str, title: &str, ups: i64, url: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "ups": ups,
        "url": url,
        "author": "tester",
        "permalink": format!("/r/memes/comments/{id}/post/"),
        "is_video": false,
        "stickied": false,
        "is_self": false,
        "over_18": false
    })
}

pub fn reddit_listing(posts: Vec<Value>) -> Value {
    let children: Vec<Value> = posts.into_iter().map(|data| json!({ "data": data })).collect();
    json!({ "data": { "children": children } })
}

pub fn feed_item(post_link: &str, title: &str, ups: i64, url: &str) -> Value {
    json!({
        "postLink": post_link,
        "subreddit": "memes",
        "title": title,
        "url": url,
        "ups": ups,
        "author": "tester",
        "nsfw": false
    })
}

pub fn feed_response(items: Vec<Value>) -> Value {
    json!({ "memes": items })
}

pub async fn mount_reddit(server: &MockServer, sub: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/r/{sub}/hot.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_feed(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/gimme/30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_standin_feed(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/gimme/dankmemes/30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount empty bodies on every upstream path the test app fetches.
pub async fn mount_all_empty(reddit_server: &MockServer, feed_server: &MockServer) {
    mount_reddit(reddit_server, "memes", reddit_listing(vec![])).await;
    mount_feed(feed_server, feed_response(vec![])).await;
    mount_standin_feed(feed_server, feed_response(vec![])).await;
}
