//! Unit conversions between imperial inputs and the SI units the model uses.

/// Kilograms per international avoirdupois pound.
pub const KG_PER_LB: f64 = 0.45359237;

/// Meters per second per mile per hour.
pub const MPS_PER_MPH: f64 = 0.44704;

/// Joules per dietary kilocalorie.
pub const JOULES_PER_KCAL: f64 = 4184.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg / KG_PER_LB
}

pub fn mph_to_mps(mph: f64) -> f64 {
    mph * MPS_PER_MPH
}

pub fn mps_to_mph(mps: f64) -> f64 {
    mps / MPS_PER_MPH
}

/// Converts a sustained metabolic rate in watts to kilocalories per hour.
///
/// One watt held for an hour is 3600 J, or 3600/4184 ≈ 0.8604 kcal.
pub fn watts_to_kcal_per_hour(watts: f64) -> f64 {
    watts * SECONDS_PER_HOUR / JOULES_PER_KCAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_conversions() {
        assert!((lb_to_kg(100.0) - 45.359237).abs() < 1e-9);
        assert!((mph_to_mps(1.0) - 0.44704).abs() < 1e-9);
        assert!((watts_to_kcal_per_hour(1.0) - 0.8604).abs() < 1e-4);
    }

    #[test]
    fn test_mass_round_trip() {
        for kg in [0.1, 1.0, 70.0, 155.5] {
            assert!((lb_to_kg(kg_to_lb(kg)) - kg).abs() < 1e-12);
        }
    }

    #[test]
    fn test_speed_round_trip() {
        for mps in [0.5, 1.2, 3.0] {
            assert!((mph_to_mps(mps_to_mph(mps)) - mps).abs() < 1e-12);
        }
    }
}
