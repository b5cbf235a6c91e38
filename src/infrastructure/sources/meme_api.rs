// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::meme::MemeCandidate;
use crate::domain::services::normalizer::{self, GifPolicy};
use crate::domain::sources::{MemeSource, SourceError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// meme-api.com adapter: one GET returning a batch of posts.
pub struct MemeApiSource {
    client: reqwest::Client,
    base_url: String,
    count: u32,
    timeout: Duration,
}

/// Wire shape shared with the stand-in feed adapter.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FeedResponse {
    #[serde(default)]
    pub memes: Vec<FeedItem>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FeedItem {
    #[serde(rename = "postLink")]
    pub post_link: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub ups: Option<i64>,
    pub author: Option<String>,
    #[serde(default)]
    pub nsfw: bool,
}

/// Map one feed item to a candidate, or skip it.
///
/// This feed serves short clips as `.gif`/`.mp4` URLs, so gifs classify
/// as video here. The post id is the last path segment of `postLink`,
/// with a content-hash fallback when absent.
pub(crate) fn map_feed_item(item: FeedItem, id_prefix: &str, label: &str) -> Option<MemeCandidate> {
    if item.nsfw {
        return None;
    }

    let url = item.url.as_deref().unwrap_or_default();
    let media = normalizer::classify_media(url, false, None, GifPolicy::Video)?;

    let native_id = item
        .post_link
        .as_deref()
        .and_then(|link| link.trim_end_matches('/').rsplit('/').next())
        .filter(|segment| !segment.is_empty() && !segment.contains('.'));

    let upvote_count = item.ups.unwrap_or(0).max(0) as u64;
    let mut candidate = MemeCandidate::new(
        normalizer::derive_id(id_prefix, native_id, &media.url),
        normalizer::normalize_title(item.title.as_deref()),
        media.url,
        media.is_video,
        upvote_count,
        label.to_string(),
    );
    candidate.author = item.author;
    candidate.permalink = item.post_link;
    Some(candidate)
}

pub(crate) async fn fetch_feed(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
    id_prefix: &str,
    label: &str,
) -> Result<Vec<MemeCandidate>, SourceError> {
    let response = client.get(url).timeout(timeout).send().await.map_err(|e| {
        if e.is_timeout() {
            SourceError::Timeout
        } else {
            SourceError::Network(e.to_string())
        }
    })?;

    if !response.status().is_success() {
        return Err(SourceError::Status(response.status().as_u16()));
    }

    let feed: FeedResponse = response
        .json()
        .await
        .map_err(|e| SourceError::Malformed(e.to_string()))?;

    Ok(feed
        .memes
        .into_iter()
        .filter_map(|item| map_feed_item(item, id_prefix, label))
        .collect())
}

impl MemeApiSource {
    pub fn new(client: reqwest::Client, base_url: String, count: u32, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            count,
            timeout,
        }
    }
}

#[async_trait]
impl MemeSource for MemeApiSource {
    async fn fetch(&self) -> Result<Vec<MemeCandidate>, SourceError> {
        let url = format!("{}/gimme/{}", self.base_url, self.count);
        fetch_feed(&self.client, &url, self.timeout, "memeapi", "Meme API").await
    }

    fn name(&self) -> &str {
        "meme-api"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
