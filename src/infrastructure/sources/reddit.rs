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
use tracing::{debug, warn};

/// Reddit listing adapter.
///
/// Fetches the hot listing of each configured subreddit as JSON. Reddit
/// rejects requests with default client identifiers, so the shared HTTP
/// client must carry a realistic User-Agent.
pub struct RedditSource {
    client: reqwest::Client,
    base_url: String,
    subreddits: Vec<String>,
    posts_per_subreddit: u32,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    #[serde(default)]
    data: PostData,
}

#[derive(Debug, Default, Deserialize)]
struct PostData {
    id: Option<String>,
    title: Option<String>,
    ups: Option<i64>,
    url: Option<String>,
    author: Option<String>,
    permalink: Option<String>,
    #[serde(default)]
    is_video: bool,
    #[serde(default)]
    stickied: bool,
    #[serde(default)]
    is_self: bool,
    #[serde(default)]
    over_18: bool,
    secure_media: Option<SecureMedia>,
}

#[derive(Debug, Deserialize)]
struct SecureMedia {
    reddit_video: Option<RedditVideo>,
}

#[derive(Debug, Deserialize)]
struct RedditVideo {
    fallback_url: Option<String>,
}

impl RedditSource {
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        subreddits: Vec<String>,
        posts_per_subreddit: u32,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url,
            subreddits,
            posts_per_subreddit,
            timeout,
        }
    }

    async fn fetch_subreddit(&self, sub: &str) -> Result<Vec<MemeCandidate>, SourceError> {
        let url = format!(
            "{}/r/{}/hot.json?limit={}",
            self.base_url, sub, self.posts_per_subreddit
        );

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout
                } else {
                    SourceError::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let listing: Listing = response
            .json()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))?;

        let label = format!("Reddit (r/{sub})");
        let memes = listing
            .data
            .children
            .into_iter()
            .filter_map(|post| map_post(post.data, &label))
            .collect();
        Ok(memes)
    }
}

fn strip_query(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.into()
        }
        Err(_) => raw.to_string(),
    }
}

/// Map one listing entry to a candidate, or skip it.
///
/// Skips pinned, self-text-only, and NSFW posts, and anything the
/// classifier rejects (no displayable media URL).
fn map_post(post: PostData, label: &str) -> Option<MemeCandidate> {
    if post.stickied || post.is_self || post.over_18 {
        return None;
    }

    let url = post.url.as_deref().unwrap_or_default();

    // Reddit HTML-escapes the DASH fallback URL inside secure_media and
    // appends a `?source=fallback` query; strip it so the media URL ends
    // in its actual extension.
    let fallback = post
        .secure_media
        .as_ref()
        .and_then(|m| m.reddit_video.as_ref())
        .and_then(|v| v.fallback_url.as_deref())
        .map(|raw| strip_query(&html_escape::decode_html_entities(raw)));

    let media =
        normalizer::classify_media(url, post.is_video, fallback.as_deref(), GifPolicy::Image)?;

    let upvote_count = post.ups.unwrap_or(0).max(0) as u64;
    let mut candidate = MemeCandidate::new(
        normalizer::derive_id("reddit", post.id.as_deref(), &media.url),
        normalizer::normalize_title(post.title.as_deref()),
        media.url,
        media.is_video,
        upvote_count,
        label.to_string(),
    );
    candidate.author = post.author;
    candidate.permalink = post
        .permalink
        .map(|p| format!("https://www.reddit.com{p}"));
    Some(candidate)
}

#[async_trait]
impl MemeSource for RedditSource {
    async fn fetch(&self) -> Result<Vec<MemeCandidate>, SourceError> {
        let mut memes = Vec::new();
        let mut last_err = None;

        for sub in &self.subreddits {
            match self.fetch_subreddit(sub).await {
                Ok(batch) => {
                    debug!(subreddit = %sub, count = batch.len(), "reddit listing fetched");
                    memes.extend(batch);
                }
                Err(e) => {
                    warn!(subreddit = %sub, error = %e, "reddit listing failed");
                    last_err = Some(e);
                }
            }
        }

        // One dead subreddit must not blank out the rest; only a fetch
        // where nothing succeeded counts as a source failure.
        match last_err {
            Some(err) if memes.is_empty() => Err(err),
            _ => Ok(memes),
        }
    }

    fn name(&self) -> &str {
        "reddit"
    }

    fn timeout(&self) -> Duration {
        // Whole-source bound: per-subreddit requests already carry their
        // own timeout, leave headroom for the sequential listing loop.
        self.timeout * (self.subreddits.len().max(1) as u32)
    }
}
