//! Build fully-initialized scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle (`Scenario`) containing:
//! - the vessel description (`Vessel`)
//! - the wind state (`Wind`)
//! - physical constants (`Constants`, defaults unless overridden)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by
//! the evaluation and visualization systems

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::params::Constants;
use crate::simulation::states::{Vessel, Wind};

/// Bevy resource representing a fully-initialized stability scenario
///
/// This is the main "runtime bundle" constructed from a
/// [`ScenarioConfig`]: the vessel, the wind acting on it, and the
/// physical constants. The viewer mutates `wind`/`vessel` in response to
/// key presses and re-runs the pure evaluation on every change
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub vessel: Vessel,
    pub wind: Wind,
    pub constants: Constants,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Vessel: map sail/hull/outrigger config -> runtime description
        let vessel = Vessel {
            sail_shape: cfg.sail.shape,
            sail_material: cfg.sail.material,
            sail_area: cfg.sail.area,
            hull_material: cfg.hull.material,
            hull_length: cfg.hull.length,
            outrigger_arm: cfg.outrigger.arm,
            float_volume: cfg.outrigger.float_volume,
        };

        // Wind state at evaluation time
        let wind = Wind {
            speed: cfg.wind.speed,
            angle_attack: cfg.wind.angle_attack,
        };

        // Constants: scenario override or the standard values
        let constants = match cfg.constants {
            Some(c) => Constants {
                air_density: c.air_density,
                water_density: c.water_density,
                g: c.g,
            },
            None => Constants::default(),
        };

        Self {
            vessel,
            wind,
            constants,
        }
    }
}
