//! Physical constants for the stability evaluation
//!
//! `Constants` holds the fixed environment values:
//! - air and water density,
//! - gravitational acceleration
//!
//! Scenario files may override them; `Default` gives the standard values

#[derive(Debug, Clone)]
pub struct Constants {
    pub air_density: f64,   // kg/m^3
    pub water_density: f64, // kg/m^3
    pub g: f64,             // m/s^2
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            air_density: 1.225,
            water_density: 1000.0,
            g: 9.8,
        }
    }
}
