pub mod report;
pub mod rig_vis2d;
