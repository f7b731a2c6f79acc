//! Torque balance around the hull's long axis
//!
//! The side force acting at the center-of-effort height heels the canoe;
//! the submerged outrigger float pushes back through its lever arm. The
//! vessel is stable when the righting torque strictly exceeds the
//! heeling torque

use crate::simulation::params::Constants;

/// Heeling (capsizing) torque: side force applied at CoE height
pub fn heeling_torque(side_force: f64, coe_height: f64) -> f64 {
    side_force * coe_height
}

/// Buoyancy of the fully submerged outrigger float:
/// F = V * rho_water * g
pub fn buoyancy_force(float_volume: f64, consts: &Constants) -> f64 {
    float_volume * consts.water_density * consts.g
}

/// Righting torque: float buoyancy through the outrigger lever arm
pub fn righting_torque(buoyancy: f64, outrigger_arm: f64) -> f64 {
    buoyancy * outrigger_arm
}

/// Outcome of the torque comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorqueBalance {
    pub heeling: f64, // N*m
    pub righting: f64, // N*m
}

impl TorqueBalance {
    pub fn new(heeling: f64, righting: f64) -> Self {
        Self { heeling, righting }
    }

    /// Strict comparison: equal torques are NOT safe
    pub fn is_safe(&self) -> bool {
        self.righting > self.heeling
    }
}
