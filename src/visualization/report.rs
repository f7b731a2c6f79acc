//! Textual report for one evaluated scenario
//!
//! Produces the educational narrative shown after an evaluation:
//! headline verdict, the two torques with their lever arms, and a short
//! analysis paragraph that branches on the outcome

use crate::simulation::states::{StabilityReport, Vessel, Wind};

/// Build the full narrative text for an evaluated scenario
pub fn narrative(vessel: &Vessel, wind: &Wind, report: &StabilityReport) -> String {
    let mut out = String::new();

    // Headline verdict
    if report.is_safe {
        out.push_str("== SAFE TO SAIL ==\n");
    } else {
        out.push_str("== CAPSIZE WARNING ==\n");
    }

    out.push_str(&format!(
        "rig: {} sail, {}, {:.1} m^2 | hull: {} ({:.0} kg/m^3), {:.1} m\n",
        vessel.sail_shape,
        vessel.sail_material,
        vessel.sail_area,
        vessel.hull_material,
        vessel.hull_material.density(),
        vessel.hull_length,
    ));
    out.push_str(&format!(
        "wind: {:.1} m/s at {:.0} deg attack\n",
        wind.speed, wind.angle_attack,
    ));
    out.push_str(&format!(
        "heeling torque:  {:.1} N*m (side force {:.1} N at CoE {:.2} m)\n",
        report.heeling_torque,
        report.side_force(),
        report.coe_height,
    ));
    out.push_str(&format!(
        "righting torque: {:.1} N*m (buoyancy {:.1} N at arm {:.1} m)\n",
        report.righting_torque, report.buoyancy_force, vessel.outrigger_arm,
    ));

    // Analysis paragraph, branching on the verdict
    if report.is_safe {
        out.push_str(&format!(
            "The hull is stable: the {} hull with the current rig resisted the \
side-wind torque. Forward drive is {:.1} N.\n",
            vessel.hull_material,
            report.forward_force(),
        ));
    } else {
        out.push_str(&format!(
            "The {} sail carries its center of effort too high, or the {} weave \
catches too much wind. Options: switch to an inverted-triangle sail to lower \
the CoE, lengthen the outrigger arm, or use a more breathable weave to spill \
part of the force.\n",
            vessel.sail_shape, vessel.sail_material,
        ));
    }

    out
}

/// Print the narrative to stdout (headless runs)
pub fn print_report(vessel: &Vessel, wind: &Wind, report: &StabilityReport) {
    print!("{}", narrative(vessel, wind, report));
}
