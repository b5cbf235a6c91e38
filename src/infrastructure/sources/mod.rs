// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Source adapter implementations.
///
/// One module per upstream provider plus the factory that builds the
/// enabled set from configuration. New providers are added as new
/// adapter implementations, never as branches in a shared fetch path.
pub mod factory;
pub mod meme_api;
pub mod reddit;
pub mod standin;

pub use factory::create_sources;
