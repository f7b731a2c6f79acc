use std::time::Instant;

use crate::simulation::coefficients::{SailMaterial, SailShape};
use crate::simulation::engine::evaluate;
use crate::simulation::params::Constants;
use crate::simulation::states::{Vessel, Wind};

const SHAPES: [SailShape; 4] = [
    SailShape::InvertedTriangle,
    SailShape::Square,
    SailShape::Rectangle,
    SailShape::RightTriangle,
];

const MATERIALS: [SailMaterial; 3] = [
    SailMaterial::WovenPandanus,
    SailMaterial::CottonCanvas,
    SailMaterial::ModernNylon,
];

/// Time the full evaluation over a dense parameter sweep
/// Grid: every shape x material, wind 0..20 m/s and attack 0..90 deg in
/// fixed steps. Prints grid size, elapsed time, and evaluations/second
pub fn bench_evaluate() {
    let consts = Constants::default();

    // Fixed hull/outrigger; the sweep varies the aero inputs
    let mut vessel = Vessel {
        sail_shape: SailShape::InvertedTriangle,
        sail_material: SailMaterial::CottonCanvas,
        sail_area: 5.0,
        hull_material: crate::simulation::coefficients::HullMaterial::TaiwanCedar,
        hull_length: 5.0,
        outrigger_arm: 2.0,
        float_volume: 0.05,
    };

    let wind_steps = 201; // 0.0 ..= 20.0 in 0.1 m/s
    let angle_steps = 91; // 0 ..= 90 in 1 deg

    let total = SHAPES.len() * MATERIALS.len() * wind_steps * angle_steps;
    println!("bench_evaluate: {} evaluations", total);

    let t0 = Instant::now();

    // Keep the verdicts observable so the sweep cannot be optimized away
    let mut safe_count = 0usize;

    for shape in SHAPES {
        for material in MATERIALS {
            vessel.sail_shape = shape;
            vessel.sail_material = material;

            for wi in 0..wind_steps {
                for ai in 0..angle_steps {
                    let wind = Wind {
                        speed: wi as f64 * 0.1,
                        angle_attack: ai as f64,
                    };

                    let report = evaluate(&vessel, &wind, &consts)
                        .expect("sweep stays inside the documented domains");
                    if report.is_safe {
                        safe_count += 1;
                    }
                }
            }
        }
    }

    let elapsed = t0.elapsed().as_secs_f64();
    println!(
        "bench_evaluate: {:.3} s total, {:.0} evals/s, {} of {} safe",
        elapsed,
        total as f64 / elapsed,
        safe_count,
        total
    );
}
