//! Health check, welcome, and terrain listing handlers.

use axum::{Extension, http::StatusCode, response::Json};

use crate::{estimator::Estimator, terrain::Terrain, types::TerrainOption};

/// Welcome banner at the API root.
pub async fn home() -> &'static str {
    "Welcome to the Backpacking Calorie Burn Calculator API"
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses(
        (status = 200, description = "Health check passed")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// List terrain categories and whether each can currently be estimated.
///
/// Speed-dependent terrains report `available: false` until a factor or
/// curve is configured, so clients can disable them up front.
#[utoipa::path(
    get,
    path = "/terrain",
    tag = "meta",
    responses(
        (status = 200, description = "Terrain categories", body = [TerrainOption])
    )
)]
pub async fn list_terrain(Extension(estimator): Extension<Estimator>) -> Json<Vec<TerrainOption>> {
    let options = Terrain::ALL
        .into_iter()
        .map(|terrain| TerrainOption {
            name: terrain.name().to_string(),
            available: estimator.terrain().is_resolved(terrain),
        })
        .collect();
    Json(options)
}
