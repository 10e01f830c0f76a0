//! Response types for API endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Calorie-burn calculation response.
///
/// Total energy is computed by the caller as rate × hours, per the
/// historical wire contract.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    pub calories_per_hour: f64,
}

/// One terrain category in the `/terrain` listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TerrainOption {
    pub name: String,
    /// False when the terrain needs a configured factor before it can be
    /// used in a calculation.
    pub available: bool,
}
