// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration.
///
/// The pipeline components never read the environment themselves; they
/// take these values as constructor parameters.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub sources: SourceSettings,
    pub aggregator: AggregatorSettings,
    pub selection: SelectionSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Upstream source configuration.
///
/// Base URLs are overridable so tests can point the adapters at mock
/// servers.
#[derive(Debug, Deserialize)]
pub struct SourceSettings {
    pub reddit_base_url: String,
    pub meme_api_base_url: String,
    /// Subreddits fetched by the Reddit adapter.
    pub subreddits: Vec<String>,
    /// Listing size requested per subreddit.
    pub posts_per_subreddit: u32,
    /// Batch size requested from the meme-api feed.
    pub meme_api_count: u32,
    /// Per-request timeout for one subreddit listing (seconds).
    pub reddit_timeout_secs: u64,
    pub meme_api_timeout_secs: u64,
    pub standin_timeout_secs: u64,
    /// Stand-in provider feeds; `None` installs the built-in set.
    pub standin_feeds: Option<Vec<StandinFeedSettings>>,
}

/// One stand-in provider: a platform label served by a curated feed key.
#[derive(Debug, Clone, Deserialize)]
pub struct StandinFeedSettings {
    /// Registry key, e.g. "9gag".
    pub name: String,
    /// Feed key requested from the meme-api-compatible endpoint.
    pub feed: String,
    /// Human-readable origin, e.g. "9GAG".
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct AggregatorSettings {
    /// Cap on simultaneously in-flight source fetches.
    pub max_concurrent: usize,
    /// Wall-clock bound on the whole fan-out (seconds, 0 disables).
    pub global_deadline_secs: u64,
    /// Consecutive failures before a source is skipped for the rest of
    /// the process lifetime.
    pub failure_threshold: u32,
}

#[derive(Debug, Deserialize)]
pub struct SelectionSettings {
    /// Result cap for the general aggregation endpoint.
    pub memes_cap: usize,
    /// Result cap for the trending endpoint.
    pub trending_cap: usize,
    /// Popularity threshold for the trending policy (exclusive).
    pub trending_min_upvotes: u64,
}

impl Settings {
    /// Load configuration from defaults, optional `config/{default,<env>}`
    /// files, and `MEMEHUB`-prefixed environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Source defaults
            .set_default("sources.reddit_base_url", "https://www.reddit.com")?
            .set_default("sources.meme_api_base_url", "https://meme-api.com")?
            .set_default(
                "sources.subreddits",
                vec!["memes", "dankmemes", "funny", "wholesomememes"],
            )?
            .set_default("sources.posts_per_subreddit", 20)?
            .set_default("sources.meme_api_count", 30)?
            .set_default("sources.reddit_timeout_secs", 5)?
            .set_default("sources.meme_api_timeout_secs", 10)?
            .set_default("sources.standin_timeout_secs", 10)?
            // Aggregator defaults
            .set_default("aggregator.max_concurrent", 6)?
            .set_default("aggregator.global_deadline_secs", 15)?
            .set_default("aggregator.failure_threshold", 3)?
            // Selection defaults
            .set_default("selection.memes_cap", 120)?
            .set_default("selection.trending_cap", 50)?
            .set_default("selection.trending_min_upvotes", 500)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("MEMEHUB").separator("__"));

        builder.build()?.try_deserialize()
    }
}
