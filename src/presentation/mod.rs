// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Presentation layer.
///
/// HTTP routing, request handlers, and error-to-response mapping.
pub mod errors;
pub mod handlers;
pub mod routes;
