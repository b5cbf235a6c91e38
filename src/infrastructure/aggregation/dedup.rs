// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::meme::MemeCandidate;
use std::collections::HashSet;

/// Drop candidates whose `id` already appeared earlier in the pool.
/// First occurrence wins; order is otherwise preserved.
pub fn dedup_by_id(pool: Vec<MemeCandidate>) -> Vec<MemeCandidate> {
    let mut seen: HashSet<String> = HashSet::with_capacity(pool.len());
    pool.into_iter()
        .filter(|candidate| seen.insert(candidate.id.clone()))
        .collect()
}
