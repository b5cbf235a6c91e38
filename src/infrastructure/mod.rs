// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Infrastructure layer.
///
/// External integrations and the machinery that drives them:
/// - sources: one adapter per upstream content provider
/// - aggregation: the concurrent fan-out, merge, and dedup stage
pub mod aggregation;
pub mod sources;
