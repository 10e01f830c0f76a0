//! Runtime configuration, read once from the environment at startup and
//! passed explicitly into router construction.

use std::env;

use anyhow::Context;

use crate::terrain::{self, Terrain, TerrainTable};

/// Overrides for the terrains that ship without a defined factor.
#[derive(Debug, Clone, Default)]
pub struct TerrainOverrides {
    /// Fixed multiplier for vegetation (`TERRAIN_FACTOR_VEGETATION`).
    pub vegetation_factor: Option<f64>,
    /// Fixed multiplier for sand (`TERRAIN_FACTOR_SAND`).
    pub sand_factor: Option<f64>,
    /// Enable the speed-dependent reference curves
    /// (`TERRAIN_REFERENCE_CURVES`).
    pub reference_curves: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// CORS origin; `None` means permissive.
    pub allowed_origin: Option<String>,
    pub terrain: TerrainOverrides,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            allowed_origin: None,
            terrain: TerrainOverrides::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .unwrap_or(8080);

        let allowed_origin = env::var("ALLOWED_ORIGIN").ok();

        let terrain = TerrainOverrides {
            vegetation_factor: parse_factor("TERRAIN_FACTOR_VEGETATION")?,
            sand_factor: parse_factor("TERRAIN_FACTOR_SAND")?,
            reference_curves: env::var("TERRAIN_REFERENCE_CURVES")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        };

        Ok(Self {
            port,
            allowed_origin,
            terrain,
        })
    }

    /// Builds the terrain table the estimator will use. Fixed overrides win
    /// over the reference curves.
    pub fn terrain_table(&self) -> TerrainTable {
        let mut table = TerrainTable::default();
        if self.terrain.reference_curves {
            table.set_curve(Terrain::Vegetation, terrain::vegetation_reference_curve());
            table.set_curve(Terrain::Sand, terrain::sand_reference_curve());
        }
        if let Some(factor) = self.terrain.vegetation_factor {
            table.set_fixed(Terrain::Vegetation, factor);
        }
        if let Some(factor) = self.terrain.sand_factor {
            table.set_fixed(Terrain::Sand, factor);
        }
        table
    }
}

fn parse_factor(var: &str) -> anyhow::Result<Option<f64>> {
    match env::var(var) {
        Ok(raw) => {
            let value: f64 = raw
                .parse()
                .with_context(|| format!("{var} must be a number, got {raw:?}"))?;
            anyhow::ensure!(value > 0.0, "{var} must be positive, got {value}");
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}
