// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Final selection stage: order randomization and truncation over the
//! merged, deduplicated pool. The RNG is injected so the stage is
//! deterministic under test with a seeded generator.

use crate::domain::models::meme::MemeCandidate;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform shuffle followed by truncation to `cap`.
///
/// Returning fewer than `cap` items is valid and expected when upstreams
/// are unavailable; the cap bounds payload size, it is not a quota.
pub fn select<R: Rng + ?Sized>(
    mut pool: Vec<MemeCandidate>,
    cap: usize,
    rng: &mut R,
) -> Vec<MemeCandidate> {
    pool.shuffle(rng);
    pool.truncate(cap);
    pool
}

/// Trending policy: keep candidates above the popularity threshold, rank
/// them descending by upvotes, cap to the top of the ranking, then
/// shuffle the capped set for display. Trades diversity for quality.
pub fn select_trending<R: Rng + ?Sized>(
    pool: Vec<MemeCandidate>,
    cap: usize,
    min_upvotes: u64,
    rng: &mut R,
) -> Vec<MemeCandidate> {
    let mut trending: Vec<MemeCandidate> = pool
        .into_iter()
        .filter(|c| c.upvote_count > min_upvotes)
        .collect();
    trending.sort_by(|a, b| b.upvote_count.cmp(&a.upvote_count));
    trending.truncate(cap);
    trending.shuffle(rng);
    trending
}
