// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Canonical record for one piece of fetched meme content.
///
/// Created fresh inside a single source adapter call, lives only for the
/// duration of one aggregation request, and is never mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemeCandidate {
    /// Stable per-item id, unique within one aggregation response.
    pub id: String,
    /// Display title, at most 100 characters.
    pub title: String,
    /// Absolute URL of the displayable asset.
    pub media_url: String,
    pub is_video: bool,
    /// Source-reported popularity signal, 0 when the upstream has none.
    pub upvote_count: u64,
    /// Human-readable origin, e.g. "Reddit (r/memes)".
    pub source_label: String,
    pub author: Option<String>,
    /// Link back to the original post when the upstream provides one.
    pub permalink: Option<String>,
}

impl MemeCandidate {
    pub fn new(
        id: String,
        title: String,
        media_url: String,
        is_video: bool,
        upvote_count: u64,
        source_label: String,
    ) -> Self {
        Self {
            id,
            title,
            media_url,
            is_video,
            upvote_count,
            source_label,
            author: None,
            permalink: None,
        }
    }
}
