use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::terrain::Terrain;

#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected before any computation; message names the field.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The requested terrain has no configured multiplier or curve.
    #[error("No terrain factor configured for {0}")]
    UnresolvedTerrain(Terrain),

    /// Formula precondition violated after validation passed.
    #[error("Estimation failed: {0}")]
    Domain(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnresolvedTerrain(terrain) => {
                warn!("rejected estimate over unresolved terrain {terrain}");
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            AppError::Domain(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
