// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::infrastructure::aggregation::MemeAggregator;
use crate::presentation::handlers::meme_handler;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn routes(aggregator: Arc<MemeAggregator>, settings: Arc<Settings>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/api/memes", get(meme_handler::get_memes))
        .route("/api/trending-memes", get(meme_handler::get_trending_memes))
        .route("/api/memes/source/{name}", get(meme_handler::get_source_memes))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(aggregator))
        .layer(Extension(settings))
}

/// Health check endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint.
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
