// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain services.
///
/// Pure rules shared by all source adapters and by the HTTP surface:
/// - normalizer: media classification, URL filtering, id derivation,
///   title truncation
/// - selection: shuffle/truncate and the trending ranking policy
pub mod normalizer;
pub mod selection;
