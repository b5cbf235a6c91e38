// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::config::settings::Settings;
use crate::domain::services::selection;
use crate::infrastructure::aggregation::MemeAggregator;
use crate::presentation::errors::{AppError, UnknownSource};

/// General aggregation endpoint: fan-out, merge, shuffle, cap.
///
/// Always 200 with a JSON array; an empty array is the valid answer
/// when every upstream came back empty.
pub async fn get_memes(
    Extension(aggregator): Extension<Arc<MemeAggregator>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> impl IntoResponse {
    let pool = aggregator.aggregate().await;
    let memes = selection::select(pool, settings.selection.memes_cap, &mut rand::rng());
    (StatusCode::OK, Json(memes))
}

/// Trending variant: popularity threshold and descending rank before
/// the cap and shuffle.
pub async fn get_trending_memes(
    Extension(aggregator): Extension<Arc<MemeAggregator>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> impl IntoResponse {
    let pool = aggregator.aggregate().await;
    let memes = selection::select_trending(
        pool,
        settings.selection.trending_cap,
        settings.selection.trending_min_upvotes,
        &mut rand::rng(),
    );
    (StatusCode::OK, Json(memes))
}

/// Single-source fetch by registry key; unknown names are the one
/// caller-input error on this surface.
pub async fn get_source_memes(
    Extension(aggregator): Extension<Arc<MemeAggregator>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match aggregator.fetch_source(&name).await {
        Some(memes) => Ok((StatusCode::OK, Json(memes))),
        None => Err(UnknownSource(name).into()),
    }
}
