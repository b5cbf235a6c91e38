// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain layer.
///
/// Core business entities and rules of the aggregation pipeline:
/// - models: the canonical meme record
/// - sources: the source adapter contract
/// - services: normalization and selection rules
///
/// The domain layer depends on no external integration.
pub mod models;
pub mod services;
pub mod sources;
