// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{SourceSettings, StandinFeedSettings};
use crate::domain::sources::MemeSource;
use crate::infrastructure::sources::meme_api::MemeApiSource;
use crate::infrastructure::sources::reddit::RedditSource;
use crate::infrastructure::sources::standin::StandinFeedSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Identifying User-Agent for all outbound fetches; several upstreams
/// reject default client identifiers.
const USER_AGENT: &str = "MemeHub/1.0 (meme aggregation service)";

/// Built-in stand-in providers, used when none are configured.
fn default_standin_feeds() -> Vec<StandinFeedSettings> {
    [
        ("9gag", "dankmemes", "9GAG"),
        ("instagram", "wholesomememes", "Instagram"),
        ("tiktok", "TikTokCringe", "TikTok"),
        ("youtube", "youtubehaiku", "YouTube"),
        ("twitter", "WhitePeopleTwitter", "Twitter"),
    ]
    .into_iter()
    .map(|(name, feed, label)| StandinFeedSettings {
        name: name.to_string(),
        feed: feed.to_string(),
        label: label.to_string(),
    })
    .collect()
}

/// Build the full set of enabled source adapters from configuration.
///
/// All adapters share one HTTP client; per-request timeouts come from
/// the per-source settings.
pub fn create_sources(settings: &SourceSettings) -> anyhow::Result<Vec<Arc<dyn MemeSource>>> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let mut sources: Vec<Arc<dyn MemeSource>> = Vec::new();

    sources.push(Arc::new(RedditSource::new(
        client.clone(),
        settings.reddit_base_url.clone(),
        settings.subreddits.clone(),
        settings.posts_per_subreddit,
        Duration::from_secs(settings.reddit_timeout_secs),
    )));

    sources.push(Arc::new(MemeApiSource::new(
        client.clone(),
        settings.meme_api_base_url.clone(),
        settings.meme_api_count,
        Duration::from_secs(settings.meme_api_timeout_secs),
    )));

    let standins = settings
        .standin_feeds
        .clone()
        .unwrap_or_else(default_standin_feeds);
    for feed in standins {
        sources.push(Arc::new(StandinFeedSource::new(
            client.clone(),
            settings.meme_api_base_url.clone(),
            feed.name,
            feed.feed,
            feed.label,
            settings.meme_api_count,
            Duration::from_secs(settings.standin_timeout_secs),
        )));
    }

    info!(count = sources.len(), "source adapters registered");
    Ok(sources)
}
