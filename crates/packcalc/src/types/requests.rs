//! Request body types for API endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Unit toggles default to metric when the client omits them.
fn default_true() -> bool {
    true
}

/// Calorie-burn calculation request.
///
/// Field names match the historical wire contract, which mixes snake_case
/// and camelCase. Masses may arrive in kg or lb, speed in m/s or mph,
/// selected per-field by the `is*` flags. Grade is a percentage; negative
/// means downhill.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CalculateRequest {
    #[validate(
        required(message = "weight is required"),
        range(exclusive_min = 0.0, message = "weight must be a positive number")
    )]
    pub weight: Option<f64>,

    #[serde(rename = "isWeightKg", default = "default_true")]
    pub is_weight_kg: bool,

    #[validate(
        required(message = "pack_weight is required"),
        range(min = 0.0, message = "pack_weight must not be negative")
    )]
    pub pack_weight: Option<f64>,

    #[serde(rename = "isPackWeightKg", default = "default_true")]
    pub is_pack_weight_kg: bool,

    #[validate(
        required(message = "speed is required"),
        range(exclusive_min = 0.0, message = "speed must be a positive number")
    )]
    pub speed: Option<f64>,

    #[serde(rename = "isSpeedMps", default = "default_true")]
    pub is_speed_mps: bool,

    #[validate(required(message = "incline_grade is required"))]
    pub incline_grade: Option<f64>,

    #[validate(required(message = "terrain_type is required"))]
    pub terrain_type: Option<String>,

    #[validate(
        required(message = "hours is required"),
        range(exclusive_min = 0.0, message = "hours must be a positive number")
    )]
    pub hours: Option<f64>,
}
