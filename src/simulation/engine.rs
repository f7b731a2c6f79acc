//! Evaluation entry point
//!
//! `evaluate` validates the numeric inputs against their documented
//! domains, resolves the categorical coefficients, computes the wind
//! load, and settles the torque balance. Fails fast on the first
//! out-of-domain value; no partial report is ever produced

use crate::simulation::coefficients::resolve;
use crate::simulation::error::{Result, SimError};
use crate::simulation::forces::wind_load;
use crate::simulation::params::Constants;
use crate::simulation::states::{StabilityReport, Vessel, Wind};
use crate::simulation::torque::{buoyancy_force, heeling_torque, righting_torque, TorqueBalance};

// Documented input domains; violating them is a caller bug and is
// rejected rather than computed through
pub const SAIL_AREA_RANGE: (f64, f64) = (2.0, 10.0); // m^2
pub const WIND_SPEED_RANGE: (f64, f64) = (0.0, 20.0); // m/s
pub const ANGLE_ATTACK_RANGE: (f64, f64) = (0.0, 90.0); // degrees
pub const HULL_LENGTH_RANGE: (f64, f64) = (3.0, 10.0); // m
pub const OUTRIGGER_ARM_RANGE: (f64, f64) = (1.0, 4.0); // m
pub const FLOAT_VOLUME_RANGE: (f64, f64) = (0.01, 0.5); // m^3

fn check_range(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if value < min || value > max || !value.is_finite() {
        return Err(SimError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Validate every numeric field of the input pair
pub fn validate(vessel: &Vessel, wind: &Wind) -> Result<()> {
    check_range("sail_area", vessel.sail_area, SAIL_AREA_RANGE)?;
    check_range("wind_speed", wind.speed, WIND_SPEED_RANGE)?;
    check_range("angle_attack", wind.angle_attack, ANGLE_ATTACK_RANGE)?;
    check_range("hull_length", vessel.hull_length, HULL_LENGTH_RANGE)?;
    check_range("outrigger_arm", vessel.outrigger_arm, OUTRIGGER_ARM_RANGE)?;
    check_range("float_volume", vessel.float_volume, FLOAT_VOLUME_RANGE)?;
    Ok(())
}

/// Run the full static-stability check for one parameter set
///
/// Deterministic and side-effect-free: identical inputs always produce
/// bit-identical reports
pub fn evaluate(vessel: &Vessel, wind: &Wind, consts: &Constants) -> Result<StabilityReport> {
    validate(vessel, wind)?;

    // Categorical choices -> numeric coefficients
    let coeffs = resolve(vessel.sail_shape, vessel.sail_material);

    // Aerodynamics: raw force, CoE height, forward/side split
    let load = wind_load(vessel.sail_area, wind, &coeffs, consts);

    // Torques: wind heeling vs float buoyancy righting
    let heeling = heeling_torque(load.force.x, load.coe_height);
    let buoyancy = buoyancy_force(vessel.float_volume, consts);
    let righting = righting_torque(buoyancy, vessel.outrigger_arm);
    let balance = TorqueBalance::new(heeling, righting);

    Ok(StabilityReport {
        coe_height: load.coe_height,
        raw_wind_force: load.raw_force,
        force: load.force,
        heeling_torque: balance.heeling,
        buoyancy_force: buoyancy,
        righting_torque: balance.righting,
        is_safe: balance.is_safe(),
    })
}
