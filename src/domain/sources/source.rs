// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::meme::MemeCandidate;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failure modes of one upstream fetch.
///
/// This is the shared adapter contract type; transport-level error types
/// (reqwest, serde_json) never cross the adapter boundary. The aggregator
/// converts any variant into an empty contribution from that source, so
/// callers above it only ever see a list, possibly empty.
#[derive(Debug, Error, Clone)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("timed out")]
    Timeout,
}

/// One upstream content provider's fetch-and-map logic.
///
/// Implementations issue their own HTTP calls, parse the upstream's JSON
/// shape, and emit normalized [`MemeCandidate`] records. Per-item defects
/// (missing fields, unusable media URLs) are skipped, never errors; only
/// whole-fetch failures surface as [`SourceError`].
#[async_trait]
pub trait MemeSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<MemeCandidate>, SourceError>;

    /// Registry key, used for per-source lookup and failure tracking.
    fn name(&self) -> &str;

    /// Upper bound the aggregator applies to one `fetch` call.
    fn timeout(&self) -> Duration;
}
