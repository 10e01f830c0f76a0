//! Calorie-burn calculation endpoint.

use axum::{Extension, response::Json};

use crate::{
    errors::AppError,
    estimator::Estimator,
    models::HikeParameters,
    types::{CalculateRequest, CalculateResponse},
};

/// Estimate calories burned per hour for a loaded hike.
#[utoipa::path(
    post,
    path = "/calculate",
    tag = "calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Estimated burn rate", body = CalculateResponse),
        (status = 400, description = "Missing, non-numeric, or out-of-range input"),
        (status = 422, description = "Terrain factor not configured for the requested terrain")
    )
)]
pub async fn calculate(
    Extension(estimator): Extension<Estimator>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, AppError> {
    let params = HikeParameters::from_request(&req)?;
    let estimate = estimator.estimate(&params)?;

    tracing::debug!(
        terrain = %params.terrain,
        watts = estimate.watts,
        kcal_per_hour = estimate.kcal_per_hour,
        "estimate computed"
    );

    Ok(Json(CalculateResponse {
        calories_per_hour: estimate.kcal_per_hour,
    }))
}
