// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::meme::MemeCandidate;
use crate::domain::sources::{MemeSource, SourceError};
use crate::infrastructure::sources::meme_api;
use async_trait::async_trait;
use std::time::Duration;

/// Generic stand-in adapter for providers without a public JSON API
/// (9GAG, Instagram, TikTok, YouTube, Twitter).
///
/// Each stand-in serves a curated meme-api feed key that approximates
/// the platform's content, labeled as the platform. Adding a provider is
/// one more configured feed, not a new code path.
pub struct StandinFeedSource {
    client: reqwest::Client,
    base_url: String,
    name: String,
    feed: String,
    label: String,
    count: u32,
    timeout: Duration,
}

impl StandinFeedSource {
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        name: String,
        feed: String,
        label: String,
        count: u32,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url,
            name,
            feed,
            label,
            count,
            timeout,
        }
    }
}

#[async_trait]
impl MemeSource for StandinFeedSource {
    async fn fetch(&self) -> Result<Vec<MemeCandidate>, SourceError> {
        let url = format!("{}/gimme/{}/{}", self.base_url, self.feed, self.count);
        meme_api::fetch_feed(&self.client, &url, self.timeout, &self.name, &self.label).await
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
