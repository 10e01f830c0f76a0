//! Domain types: validated hike parameters and estimation results.

use validator::Validate;

use crate::{errors::AppError, terrain::Terrain, types::CalculateRequest, units};

/// Validated hiking parameters, normalized to SI units.
///
/// Only the normalizer constructs this, so every value has already been
/// converted and range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HikeParameters {
    /// Body mass in kilograms, strictly positive.
    pub body_mass_kg: f64,
    /// Pack mass in kilograms, non-negative.
    pub load_mass_kg: f64,
    /// Walking speed in meters per second, strictly positive.
    pub speed_mps: f64,
    /// Incline grade as a fraction (rise over run), negative downhill.
    pub grade: f64,
    pub terrain: Terrain,
    /// Hike duration in hours, strictly positive.
    pub duration_hours: f64,
}

impl HikeParameters {
    /// Normalizes a raw request: applies unit conversions, converts grade
    /// percent to a fraction, and resolves the terrain name.
    pub fn from_request(req: &CalculateRequest) -> Result<Self, AppError> {
        req.validate().map_err(|e| {
            let messages: Vec<String> = e
                .field_errors()
                .into_iter()
                .flat_map(|(_, errors)| {
                    errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                })
                .collect();
            AppError::Validation(messages.join(", "))
        })?;

        let weight = required(req.weight, "weight")?;
        let pack_weight = required(req.pack_weight, "pack_weight")?;
        let speed = required(req.speed, "speed")?;
        let grade_percent = required(req.incline_grade, "incline_grade")?;
        let hours = required(req.hours, "hours")?;

        let terrain: Terrain = req
            .terrain_type
            .as_deref()
            .ok_or_else(|| AppError::Validation("terrain_type is required".to_string()))?
            .parse()
            .map_err(|e| AppError::Validation(format!("{e}")))?;

        let body_mass_kg = if req.is_weight_kg {
            weight
        } else {
            units::lb_to_kg(weight)
        };
        let load_mass_kg = if req.is_pack_weight_kg {
            pack_weight
        } else {
            units::lb_to_kg(pack_weight)
        };
        let speed_mps = if req.is_speed_mps {
            speed
        } else {
            units::mph_to_mps(speed)
        };

        // Range invariants are established in SI units, after conversion.
        if !body_mass_kg.is_finite() || body_mass_kg <= 0.0 {
            return Err(AppError::Validation(
                "weight must be a positive number".to_string(),
            ));
        }
        if !load_mass_kg.is_finite() || load_mass_kg < 0.0 {
            return Err(AppError::Validation(
                "pack_weight must not be negative".to_string(),
            ));
        }
        if !speed_mps.is_finite() || speed_mps <= 0.0 {
            return Err(AppError::Validation(
                "speed must be a positive number".to_string(),
            ));
        }
        if !grade_percent.is_finite() {
            return Err(AppError::Validation(
                "incline_grade must be a finite number".to_string(),
            ));
        }
        if !hours.is_finite() || hours <= 0.0 {
            return Err(AppError::Validation(
                "hours must be a positive number".to_string(),
            ));
        }

        Ok(HikeParameters {
            body_mass_kg,
            load_mass_kg,
            speed_mps,
            grade: grade_percent / 100.0,
            terrain,
            duration_hours: hours,
        })
    }
}

fn required(value: Option<f64>, field: &str) -> Result<f64, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

/// Outcome of one estimation. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationResult {
    /// Metabolic rate in watts.
    pub watts: f64,
    /// Metabolic rate converted for display.
    pub kcal_per_hour: f64,
    /// `kcal_per_hour` × duration.
    pub total_kcal: f64,
}
