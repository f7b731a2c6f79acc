//! Core input/output types for the stability evaluation.
//!
//! Defines the vessel and wind descriptions consumed by the evaluator
//! and the `StabilityReport` it produces. The decomposed sail force is
//! an `NVec2` with x = side (heeling-driving) and y = forward (thrust).

use nalgebra::Vector2;

use crate::simulation::coefficients::{HullMaterial, SailMaterial, SailShape};

pub type NVec2 = Vector2<f64>;

/// Static description of the canoe and its rig
#[derive(Debug, Clone)]
pub struct Vessel {
    pub sail_shape: SailShape,
    pub sail_material: SailMaterial,
    pub sail_area: f64, // m^2
    pub hull_material: HullMaterial, // reserved, not used downstream
    pub hull_length: f64, // m, reserved, not used downstream
    pub outrigger_arm: f64, // m, righting lever arm
    pub float_volume: f64, // m^3, outrigger float displacement
}

/// Wind acting on the sail
#[derive(Debug, Clone)]
pub struct Wind {
    pub speed: f64, // m/s
    pub angle_attack: f64, // degrees between wind and sail surface
}

/// Full result of one evaluation
/// Pure function of (Vessel, Wind, Constants); recomputed fresh per call
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityReport {
    pub coe_height: f64, // m, center of effort above the hull
    pub raw_wind_force: f64, // N, before decomposition
    pub force: NVec2, // N, x = side, y = forward
    pub heeling_torque: f64, // N*m
    pub buoyancy_force: f64, // N, from the outrigger float
    pub righting_torque: f64, // N*m
    pub is_safe: bool,
}

impl StabilityReport {
    /// Side (heeling-driving) component of the sail force
    pub fn side_force(&self) -> f64 {
        self.force.x
    }

    /// Forward (thrust) component of the sail force
    pub fn forward_force(&self) -> f64 {
        self.force.y
    }
}
