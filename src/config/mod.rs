// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Configuration module.
///
/// Loads server, source, aggregation, and selection settings from
/// defaults, optional config files, and environment overrides.
pub mod settings;
