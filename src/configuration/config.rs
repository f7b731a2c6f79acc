//! Configuration types for loading stability scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`SailConfig`]      – sail shape, material, and area
//! - [`WindConfig`]      – wind speed and angle of attack
//! - [`HullConfig`]      – hull material and length
//! - [`OutriggerConfig`] – lever arm and float volume
//! - [`ConstantsConfig`] – optional physical-constant overrides
//! - [`ScenarioConfig`]  – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! sail:
//!   shape: "inverted_triangle"   # or "square", "rectangle", "right_triangle"
//!   material: "cotton_canvas"    # or "woven_pandanus", "modern_nylon"
//!   area: 5.0                    # m^2, [2.0, 10.0]
//!
//! wind:
//!   speed: 10.0                  # m/s, [0.0, 20.0]
//!   angle_attack: 60.0           # degrees, [0, 90]
//!
//! hull:
//!   material: "taiwan_cedar"     # balsa | taiwan_cedar | camphor | bamboo_composite | fiberglass
//!   length: 5.0                  # m, [3.0, 10.0]
//!
//! outrigger:
//!   arm: 2.0                     # m, [1.0, 4.0]
//!   float_volume: 0.05           # m^3, [0.01, 0.5]
//!
//! # optional, defaults shown
//! constants:
//!   air_density: 1.225
//!   water_density: 1000.0
//!   g: 9.8
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation; numeric domains are enforced at evaluation time

use serde::Deserialize;

use crate::simulation::coefficients::{HullMaterial, SailMaterial, SailShape};

/// Sail description as written in a scenario file
#[derive(Deserialize, Debug, Clone)]
pub struct SailConfig {
    pub shape: SailShape, // planform, sets CoE height and aero coefficients
    pub material: SailMaterial, // weave, sets pressure efficiency
    pub area: f64,        // m^2
}

/// Wind description
#[derive(Deserialize, Debug, Clone)]
pub struct WindConfig {
    pub speed: f64,        // m/s
    pub angle_attack: f64, // degrees between wind and sail surface
}

/// Hull description; material density and length are reserved inputs
#[derive(Deserialize, Debug, Clone)]
pub struct HullConfig {
    pub material: HullMaterial,
    pub length: f64, // m
}

/// Outrigger description
#[derive(Deserialize, Debug, Clone)]
pub struct OutriggerConfig {
    pub arm: f64,          // m, righting lever arm
    pub float_volume: f64, // m^3, float displacement
}

/// Optional overrides for the physical constants
#[derive(Deserialize, Debug, Clone)]
pub struct ConstantsConfig {
    pub air_density: f64,   // kg/m^3
    pub water_density: f64, // kg/m^3
    pub g: f64,             // m/s^2
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub sail: SailConfig,
    pub wind: WindConfig,
    pub hull: HullConfig,
    pub outrigger: OutriggerConfig,
    pub constants: Option<ConstantsConfig>, // defaults apply when omitted
}
