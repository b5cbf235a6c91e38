// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AggregatorSettings;
use crate::domain::models::meme::MemeCandidate;
use crate::domain::sources::MemeSource;
use crate::infrastructure::aggregation::dedup;
use dashmap::DashMap;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Cap on simultaneously in-flight source fetches.
    pub max_concurrent: usize,
    /// Wall-clock bound on one whole fan-out; `None` disables it.
    pub global_deadline: Option<Duration>,
    /// Consecutive failures before a source is skipped for the rest of
    /// the process lifetime; a success before the threshold clears the
    /// count. 0 disables the tracking.
    pub failure_threshold: u32,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 6,
            global_deadline: Some(Duration::from_secs(15)),
            failure_threshold: 3,
        }
    }
}

impl From<&AggregatorSettings> for AggregatorConfig {
    fn from(settings: &AggregatorSettings) -> Self {
        Self {
            max_concurrent: settings.max_concurrent.max(1),
            global_deadline: match settings.global_deadline_secs {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            failure_threshold: settings.failure_threshold,
        }
    }
}

/// Fan-out aggregator over the registered source adapters.
///
/// Invokes every source concurrently under a bounded worker pool, each
/// call gated by the source's own timeout. Failures and timeouts
/// collapse to an empty contribution from that source; partial results
/// are the normal success case. Merged results are deduplicated by id,
/// first occurrence winning.
pub struct MemeAggregator {
    sources: Vec<Arc<dyn MemeSource>>,
    config: AggregatorConfig,
    failures: DashMap<String, u32>,
}

impl MemeAggregator {
    pub fn new(sources: Vec<Arc<dyn MemeSource>>, config: AggregatorConfig) -> Self {
        Self {
            sources,
            config,
            failures: DashMap::new(),
        }
    }

    /// Run the full fan-out and return the merged, deduplicated pool.
    ///
    /// Never fails: a fan-out where every source came back empty yields
    /// an empty pool. When a global deadline is configured, results
    /// collected before it expires are returned and the rest abandoned.
    pub async fn aggregate(&self) -> Vec<MemeCandidate> {
        // Materialize the (still lazy) futures up front; mapping inside
        // the stream trips rustc's higher-ranked closure inference over
        // the trait-object lifetime.
        let fetches: Vec<_> = self
            .sources
            .iter()
            .cloned()
            .map(|source| self.invoke(source))
            .collect();
        let mut stream = futures::stream::iter(fetches).buffer_unordered(self.config.max_concurrent);

        let mut merged: Vec<MemeCandidate> = Vec::new();
        match self.config.global_deadline {
            Some(deadline) => {
                let deadline = tokio::time::Instant::now() + deadline;
                loop {
                    match tokio::time::timeout_at(deadline, stream.next()).await {
                        Ok(Some(batch)) => merged.extend(batch),
                        Ok(None) => break,
                        Err(_) => {
                            warn!("aggregation deadline reached, returning partial results");
                            break;
                        }
                    }
                }
            }
            None => {
                while let Some(batch) = stream.next().await {
                    merged.extend(batch);
                }
            }
        }

        let unique = dedup::dedup_by_id(merged);
        info!(count = unique.len(), "aggregation pool merged");
        unique
    }

    /// Fetch one source by registry key; `None` for an unknown name.
    ///
    /// The adapter boundary applies here too: upstream failure yields an
    /// empty list, not an error.
    pub async fn fetch_source(&self, name: &str) -> Option<Vec<MemeCandidate>> {
        let source = self.sources.iter().find(|s| s.name() == name)?.clone();
        Some(self.invoke(source).await)
    }

    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name().to_string()).collect()
    }

    /// One gated source call: circuit check, per-source timeout, and the
    /// error-to-empty boundary. The aggregator only ever sees a list,
    /// possibly empty, per source.
    async fn invoke(&self, source: Arc<dyn MemeSource>) -> Vec<MemeCandidate> {
        let name = source.name().to_string();

        if self.config.failure_threshold > 0 {
            let open = self
                .failures
                .get(&name)
                .map(|count| *count >= self.config.failure_threshold)
                .unwrap_or(false);
            if open {
                warn!(source = %name, "source circuit open, skipping");
                return Vec::new();
            }
        }

        match tokio::time::timeout(source.timeout(), source.fetch()).await {
            Ok(Ok(memes)) => {
                info!(source = %name, count = memes.len(), "source returned results");
                self.failures.remove(&name);
                memes
            }
            Ok(Err(e)) => {
                warn!(source = %name, error = %e, "source failed");
                *self.failures.entry(name).or_insert(0) += 1;
                Vec::new()
            }
            Err(_) => {
                warn!(source = %name, "source timed out");
                *self.failures.entry(name).or_insert(0) += 1;
                Vec::new()
            }
        }
    }
}
