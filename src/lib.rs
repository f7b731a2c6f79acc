pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, StabilityReport, Vessel, Wind};
pub use simulation::coefficients::{resolve, CoefficientSet, HullMaterial, SailMaterial, SailShape};
pub use simulation::engine::evaluate;
pub use simulation::error::SimError;
pub use simulation::params::Constants;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    ConstantsConfig, HullConfig, OutriggerConfig, SailConfig, ScenarioConfig, WindConfig,
};

pub use visualization::{report::print_report, rig_vis2d::run_2d};

pub use benchmark::benchmark::bench_evaluate;
