// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Configuration module.
///
/// Settings for the server, sources, aggregation, and selection.
pub mod config;

/// Domain module.
///
/// Core entities and rules: the canonical meme record, the source
/// adapter contract, normalization, and selection.
pub mod domain;

/// Infrastructure module.
///
/// Upstream source adapters and the concurrent fan-out aggregator.
pub mod infrastructure;

/// Presentation module.
///
/// HTTP routes, handlers, and error mapping.
pub mod presentation;

/// Utility module.
///
/// Telemetry initialization and shared helpers.
pub mod utils;
