//! Terrain categories and their energy-cost multipliers.
//!
//! Most terrains carry a fixed multiplier relative to a paved surface.
//! Vegetation and sand are speed-dependent and ship unresolved: the fitted
//! curves were never validated, so they must be enabled explicitly through
//! configuration (either a fixed override or the reference curves below).

use std::{fmt, str::FromStr, sync::Arc};

use enum_map::{Enum, EnumMap, enum_map};
use thiserror::Error;

use crate::errors::AppError;

/// Terrain category a hike takes place on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Terrain {
    Slippery,
    Vegetation,
    Swamp,
    PavedRoad,
    GravelRoad,
    DirtRoad,
    Sand,
}

impl Terrain {
    pub const ALL: [Terrain; 7] = [
        Terrain::Slippery,
        Terrain::Vegetation,
        Terrain::Swamp,
        Terrain::PavedRoad,
        Terrain::GravelRoad,
        Terrain::DirtRoad,
        Terrain::Sand,
    ];

    /// Display name, also the wire name in `terrain_type`.
    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Slippery => "Slippery Terrain",
            Terrain::Vegetation => "Vegetation",
            Terrain::Swamp => "Swamp",
            Terrain::PavedRoad => "Paved Road",
            Terrain::GravelRoad => "Gravel Road",
            Terrain::DirtRoad => "Dirt Road",
            Terrain::Sand => "Sand",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown terrain type: {0}")]
pub struct UnknownTerrain(pub String);

impl FromStr for Terrain {
    type Err = UnknownTerrain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Terrain::ALL
            .into_iter()
            .find(|t| t.name() == s.trim())
            .ok_or_else(|| UnknownTerrain(s.to_string()))
    }
}

/// Lookup function from walking speed (m/s) to a terrain multiplier.
pub type SpeedCurve = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Energy cost of a terrain category.
#[derive(Clone)]
pub enum TerrainCost {
    /// Constant multiplier, independent of speed.
    Fixed(f64),
    /// Multiplier computed from walking speed.
    SpeedDependent(SpeedCurve),
    /// No multiplier defined; estimation over this terrain fails until
    /// configuration supplies one.
    Unresolved,
}

impl fmt::Debug for TerrainCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainCost::Fixed(v) => write!(f, "Fixed({v})"),
            TerrainCost::SpeedDependent(_) => f.write_str("SpeedDependent(..)"),
            TerrainCost::Unresolved => f.write_str("Unresolved"),
        }
    }
}

/// Maps every terrain category to its energy cost.
#[derive(Debug, Clone)]
pub struct TerrainTable {
    costs: EnumMap<Terrain, TerrainCost>,
}

impl Default for TerrainTable {
    fn default() -> Self {
        Self {
            costs: enum_map! {
                Terrain::Slippery => TerrainCost::Fixed(1.7),
                Terrain::Vegetation => TerrainCost::Unresolved,
                Terrain::Swamp => TerrainCost::Fixed(3.5),
                Terrain::PavedRoad => TerrainCost::Fixed(1.0),
                Terrain::GravelRoad => TerrainCost::Fixed(1.0),
                Terrain::DirtRoad => TerrainCost::Fixed(1.2),
                Terrain::Sand => TerrainCost::Unresolved,
            },
        }
    }
}

impl TerrainTable {
    pub fn set_fixed(&mut self, terrain: Terrain, factor: f64) {
        self.costs[terrain] = TerrainCost::Fixed(factor);
    }

    pub fn set_curve(&mut self, terrain: Terrain, curve: SpeedCurve) {
        self.costs[terrain] = TerrainCost::SpeedDependent(curve);
    }

    /// Whether estimation over this terrain can currently succeed.
    pub fn is_resolved(&self, terrain: Terrain) -> bool {
        !matches!(self.costs[terrain], TerrainCost::Unresolved)
    }

    /// Resolves the multiplier for a terrain at the given speed.
    pub fn factor(&self, terrain: Terrain, speed_mps: f64) -> Result<f64, AppError> {
        match &self.costs[terrain] {
            TerrainCost::Fixed(factor) => Ok(*factor),
            TerrainCost::SpeedDependent(curve) => Ok(curve(speed_mps)),
            TerrainCost::Unresolved => Err(AppError::UnresolvedTerrain(terrain)),
        }
    }
}

/// Speed-dependent cost curve for vegetation from the original field data.
/// Opt-in only; the fit was never validated.
pub fn vegetation_reference_curve() -> SpeedCurve {
    Arc::new(|v| (0.0718 * v).powi(3) + (1.3 * v).powi(2) - 5.3701 * v + 6.0705)
}

/// Speed-dependent cost curve for loose sand from the original field data.
/// Opt-in only; diverges as speed approaches zero.
pub fn sand_reference_curve() -> SpeedCurve {
    Arc::new(|v| 1.5 + 1.3 / (v * v))
}
