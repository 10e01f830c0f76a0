//! Pandolf load-carriage energy expenditure model.
//!
//! Pandolf, Givoni & Goldman (1977):
//!
//! ```text
//! M = 1.5·W + 2.0·(W+L)·(L/W)² + η·(W+L)·(1.5·V² + 0.35·V·G)
//! ```
//!
//! W body mass (kg), L load mass (kg), V speed (m/s), G grade as a
//! fraction, η terrain factor, M metabolic rate in watts.

use crate::{
    errors::AppError,
    models::{EstimationResult, HikeParameters},
    terrain::TerrainTable,
    units,
};

/// Evaluates the Pandolf equation. `grade` is a fraction, not percent.
pub fn pandolf_watts(body_kg: f64, load_kg: f64, speed_mps: f64, grade: f64, eta: f64) -> f64 {
    let carried = body_kg + load_kg;
    1.5 * body_kg
        + 2.0 * carried * (load_kg / body_kg).powi(2)
        + eta * carried * (1.5 * speed_mps * speed_mps + 0.35 * speed_mps * grade)
}

/// Stateless estimator; the terrain table is fixed at construction.
#[derive(Debug, Clone)]
pub struct Estimator {
    terrain: TerrainTable,
}

impl Estimator {
    pub fn new(terrain: TerrainTable) -> Self {
        Self { terrain }
    }

    pub fn terrain(&self) -> &TerrainTable {
        &self.terrain
    }

    /// Computes the metabolic rate and the total over the hike duration.
    pub fn estimate(&self, params: &HikeParameters) -> Result<EstimationResult, AppError> {
        let eta = self.terrain.factor(params.terrain, params.speed_mps)?;
        let watts = pandolf_watts(
            params.body_mass_kg,
            params.load_mass_kg,
            params.speed_mps,
            params.grade,
            eta,
        );
        if !watts.is_finite() {
            return Err(AppError::Domain(
                "metabolic rate is not finite for these inputs".to_string(),
            ));
        }

        let kcal_per_hour = units::watts_to_kcal_per_hour(watts);
        Ok(EstimationResult {
            watts,
            kcal_per_hour,
            total_kcal: kcal_per_hour * params.duration_hours,
        })
    }
}
