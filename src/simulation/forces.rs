//! Aerodynamic force computation for the sail
//!
//! Computes the raw wind force from dynamic pressure, the height of the
//! center of effort, and the decomposition into forward (thrust) and
//! side (heeling-driving) components

use crate::simulation::coefficients::CoefficientSet;
use crate::simulation::params::Constants;
use crate::simulation::states::{NVec2, Wind};

/// Assumed sail base width in meters; the sail height is approximated
/// as area / base. A simplification of the model, not configurable
pub const BASE_WIDTH_APPROX: f64 = 2.0;

/// Wind force acting on the sail, already decomposed
#[derive(Debug, Clone, PartialEq)]
pub struct WindLoad {
    pub raw_force: f64, // N, magnitude before decomposition
    pub coe_height: f64, // m, where the force is considered to act
    pub force: NVec2, // N, x = side, y = forward
}

/// Compute the wind load on a sail of `sail_area` under `wind`
///
/// Steps:
/// 1. approximate sail height from area and the fixed base width,
/// 2. scale it by the shape's lever-arm coefficient to get the CoE height,
/// 3. raw force from dynamic pressure: 0.5 * rho * A * v^2, scaled by
///    the material efficiency,
/// 4. split by the angle of attack: sin -> forward (lift-like),
///    cos -> side (drag-like), each scaled by its shape coefficient
pub fn wind_load(sail_area: f64, wind: &Wind, coeffs: &CoefficientSet, consts: &Constants) -> WindLoad {
    // Height of the (idealized) sail, from fixed base width
    let height_approx = sail_area / BASE_WIDTH_APPROX;

    // Center of effort: fraction of the height, set by the planform
    let coe_height = height_approx * coeffs.lever_arm_coeff;

    // Dynamic pressure force on the whole sail:
    // F = 1/2 * rho_air * A * v^2, then the weave's efficiency factor
    let raw_force =
        0.5 * consts.air_density * sail_area * wind.speed * wind.speed * coeffs.material_efficiency;

    // Angle between wind and sail surface, radians for sin/cos
    let rad = wind.angle_attack.to_radians();

    // -------------------------
    // Vector decomposition:
    // forward = F * sin(angle) * lift efficiency
    // side    = F * cos(angle) * drag coefficient
    //
    // angle = 0  -> pure drag, no thrust
    // angle = 90 -> pure thrust, no side load
    // -------------------------
    let forward = raw_force * rad.sin() * coeffs.shape_lift_eff;
    let side = raw_force * rad.cos() * coeffs.shape_drag_coeff;

    WindLoad {
        raw_force,
        coe_height,
        force: NVec2::new(side, forward),
    }
}
