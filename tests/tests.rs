use vakasim::configuration::config::ScenarioConfig;
use vakasim::simulation::coefficients::{resolve, HullMaterial, SailMaterial, SailShape};
use vakasim::simulation::engine::evaluate;
use vakasim::simulation::error::SimError;
use vakasim::simulation::forces::wind_load;
use vakasim::simulation::params::Constants;
use vakasim::simulation::scenario::Scenario;
use vakasim::simulation::states::{Vessel, Wind};
use vakasim::simulation::torque::{buoyancy_force, heeling_torque, righting_torque, TorqueBalance};

/// Build the baseline canoe: 5 m^2 sail, cedar hull, 2 m outrigger arm
pub fn canoe(shape: SailShape, material: SailMaterial) -> Vessel {
    Vessel {
        sail_shape: shape,
        sail_material: material,
        sail_area: 5.0,
        hull_material: HullMaterial::TaiwanCedar,
        hull_length: 5.0,
        outrigger_arm: 2.0,
        float_volume: 0.05,
    }
}

/// 10 m/s wind at 60 degrees of attack
pub fn trade_wind() -> Wind {
    Wind {
        speed: 10.0,
        angle_attack: 60.0,
    }
}

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected ~{expected}, got {actual}"
    );
}

// ==================================================================================
// Coefficient table tests
// ==================================================================================

#[test]
fn material_efficiency_table() {
    let shapes = [
        SailShape::InvertedTriangle,
        SailShape::Square,
        SailShape::Rectangle,
        SailShape::RightTriangle,
    ];

    // Efficiency depends only on the material, whatever the shape
    for shape in shapes {
        assert_eq!(resolve(shape, SailMaterial::WovenPandanus).material_efficiency, 0.85);
        assert_eq!(resolve(shape, SailMaterial::CottonCanvas).material_efficiency, 1.0);
        assert_eq!(resolve(shape, SailMaterial::ModernNylon).material_efficiency, 1.15);
    }
}

#[test]
fn shape_coefficient_table() {
    let cases = [
        (SailShape::InvertedTriangle, 0.4, 1.2, 0.8),
        (SailShape::Square, 0.5, 1.0, 1.0),
        (SailShape::Rectangle, 0.6, 0.9, 1.1),
        (SailShape::RightTriangle, 0.45, 1.3, 0.6),
    ];

    for (shape, lever, lift, drag) in cases {
        let c = resolve(shape, SailMaterial::CottonCanvas);
        assert_eq!(c.lever_arm_coeff, lever, "{shape:?} lever arm");
        assert_eq!(c.shape_lift_eff, lift, "{shape:?} lift efficiency");
        assert_eq!(c.shape_drag_coeff, drag, "{shape:?} drag coefficient");
    }
}

#[test]
fn hull_density_table() {
    assert_eq!(HullMaterial::Balsa.density(), 150.0);
    assert_eq!(HullMaterial::TaiwanCedar.density(), 450.0);
    assert_eq!(HullMaterial::Camphor.density(), 550.0);
    assert_eq!(HullMaterial::BambooComposite.density(), 600.0);
    assert_eq!(HullMaterial::Fiberglass.density(), 1500.0);
}

#[test]
fn labels_parse_and_unknown_labels_fail() {
    assert_eq!("square".parse::<SailShape>().unwrap(), SailShape::Square);
    assert_eq!(
        "woven_pandanus".parse::<SailMaterial>().unwrap(),
        SailMaterial::WovenPandanus
    );
    assert_eq!(
        "bamboo_composite".parse::<HullMaterial>().unwrap(),
        HullMaterial::BambooComposite
    );

    // No silent default branch: junk labels are rejected
    let err = "plastic_tarp".parse::<SailMaterial>().unwrap_err();
    assert!(matches!(err, SimError::InvalidSelection { .. }), "{err:?}");
    assert!("trapezoid".parse::<SailShape>().is_err());
    assert!("concrete".parse::<HullMaterial>().is_err());
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn zero_wind_means_zero_forces() {
    let consts = Constants::default();
    let coeffs = resolve(SailShape::Square, SailMaterial::CottonCanvas);
    let calm = Wind {
        speed: 0.0,
        angle_attack: 45.0,
    };

    let load = wind_load(5.0, &calm, &coeffs, &consts);

    assert_eq!(load.raw_force, 0.0);
    assert_eq!(load.force.x, 0.0);
    assert_eq!(load.force.y, 0.0);
}

#[test]
fn angle_zero_is_pure_drag() {
    let consts = Constants::default();
    let coeffs = resolve(SailShape::InvertedTriangle, SailMaterial::CottonCanvas);
    let beam = Wind {
        speed: 10.0,
        angle_attack: 0.0,
    };

    let load = wind_load(5.0, &beam, &coeffs, &consts);

    // sin(0) and cos(0) are exact, so this holds bitwise
    assert_eq!(load.force.y, 0.0);
    assert_eq!(load.force.x, load.raw_force * coeffs.shape_drag_coeff);
}

#[test]
fn angle_ninety_is_pure_thrust() {
    let consts = Constants::default();
    let coeffs = resolve(SailShape::Square, SailMaterial::CottonCanvas);
    let astern = Wind {
        speed: 10.0,
        angle_attack: 90.0,
    };

    let load = wind_load(5.0, &astern, &coeffs, &consts);

    // cos(pi/2) in f64 is ~6e-17, not exactly zero
    assert!(load.force.x.abs() < 1e-9, "side = {}", load.force.x);
    assert_close(load.force.y, load.raw_force * coeffs.shape_lift_eff, 1e-9);
}

#[test]
fn forces_stay_nonnegative_on_the_domain() {
    let consts = Constants::default();
    let shapes = [
        SailShape::InvertedTriangle,
        SailShape::Square,
        SailShape::Rectangle,
        SailShape::RightTriangle,
    ];
    let materials = [
        SailMaterial::WovenPandanus,
        SailMaterial::CottonCanvas,
        SailMaterial::ModernNylon,
    ];

    for shape in shapes {
        for material in materials {
            let coeffs = resolve(shape, material);
            for speed_step in 0..=4 {
                for angle_step in 0..=6 {
                    let wind = Wind {
                        speed: speed_step as f64 * 5.0,
                        angle_attack: angle_step as f64 * 15.0,
                    };
                    let load = wind_load(5.0, &wind, &coeffs, &consts);

                    assert!(load.raw_force >= 0.0);
                    assert!(load.force.x >= 0.0);
                    assert!(load.force.y >= 0.0);
                }
            }
        }
    }
}

#[test]
fn decomposition_identity_holds() {
    let consts = Constants::default();
    let coeffs = resolve(SailShape::RightTriangle, SailMaterial::ModernNylon);
    let wind = Wind {
        speed: 13.5,
        angle_attack: 37.0,
    };

    let load = wind_load(7.5, &wind, &coeffs, &consts);

    // forward^2 + side^2 = raw^2 * (sin^2 lift^2 + cos^2 drag^2)
    let lhs = load.force.y * load.force.y + load.force.x * load.force.x;
    let rad = wind.angle_attack.to_radians();
    let rhs = load.raw_force * load.raw_force
        * (rad.sin().powi(2) * coeffs.shape_lift_eff.powi(2)
            + rad.cos().powi(2) * coeffs.shape_drag_coeff.powi(2));

    assert_close(lhs / rhs, 1.0, 1e-12);
}

#[test]
fn raw_force_grows_with_wind_speed() {
    let consts = Constants::default();
    let coeffs = resolve(SailShape::Square, SailMaterial::CottonCanvas);

    let mut previous = 0.0;
    for step in 1..=10 {
        let wind = Wind {
            speed: step as f64 * 2.0,
            angle_attack: 45.0,
        };
        let load = wind_load(5.0, &wind, &coeffs, &consts);
        assert!(
            load.raw_force > previous,
            "raw force not increasing at {} m/s",
            wind.speed
        );
        previous = load.raw_force;
    }
}

// ==================================================================================
// Torque balance and full-evaluation tests
// ==================================================================================

#[test]
fn baseline_crab_claw_scenario() {
    let vessel = canoe(SailShape::InvertedTriangle, SailMaterial::CottonCanvas);
    let report = evaluate(&vessel, &trade_wind(), &Constants::default()).unwrap();

    // 0.5 * 1.225 * 5.0 * 100 * 1.0
    assert_close(report.raw_wind_force, 306.25, 1e-9);
    // (5.0 / 2.0) * 0.4
    assert_close(report.coe_height, 1.0, 1e-12);
    // 306.25 * sin(60) * 1.2
    assert_close(report.forward_force(), 318.2, 0.1);
    // 306.25 * cos(60) * 0.8
    assert_close(report.side_force(), 122.5, 1e-6);
    assert_close(report.heeling_torque, 122.5, 1e-6);
    // 0.05 * 1000 * 9.8
    assert_close(report.buoyancy_force, 490.0, 1e-9);
    assert_close(report.righting_torque, 980.0, 1e-9);
    assert!(report.is_safe);
}

#[test]
fn tall_rectangle_heels_harder_but_still_safe() {
    let vessel = canoe(SailShape::Rectangle, SailMaterial::CottonCanvas);
    let report = evaluate(&vessel, &trade_wind(), &Constants::default()).unwrap();

    // lever 0.6 -> CoE at 1.5 m, drag 1.1 -> more side force
    assert_close(report.coe_height, 1.5, 1e-12);
    assert_close(report.side_force(), 168.4, 0.1);
    assert_close(report.heeling_torque, 252.7, 0.1);
    assert!(report.heeling_torque < report.righting_torque);
    assert!(report.is_safe);
}

#[test]
fn running_at_ninety_degrees_is_safe_with_minimal_float() {
    let vessel = Vessel {
        sail_shape: SailShape::Square,
        sail_material: SailMaterial::ModernNylon,
        sail_area: 10.0,
        hull_material: HullMaterial::Balsa,
        hull_length: 4.0,
        outrigger_arm: 1.0,
        float_volume: 0.01,
    };
    let gale = Wind {
        speed: 20.0,
        angle_attack: 90.0,
    };

    let report = evaluate(&vessel, &gale, &Constants::default()).unwrap();

    // 0.5 * 1.225 * 10 * 400 * 1.15
    assert_close(report.raw_wind_force, 2817.5, 1e-6);
    // cos(90) kills the side force entirely, so even the minimum
    // outrigger keeps the canoe upright
    assert!(report.heeling_torque.abs() < 1e-8);
    assert_close(report.righting_torque, 98.0, 1e-9);
    assert!(report.is_safe);
}

#[test]
fn calm_wind_is_always_safe() {
    let vessel = canoe(SailShape::Rectangle, SailMaterial::ModernNylon);
    let calm = Wind {
        speed: 0.0,
        angle_attack: 30.0,
    };

    let report = evaluate(&vessel, &calm, &Constants::default()).unwrap();

    assert_eq!(report.heeling_torque, 0.0);
    assert!(report.righting_torque > 0.0);
    assert!(report.is_safe);
}

#[test]
fn oversized_rig_in_a_gale_capsizes() {
    let vessel = Vessel {
        sail_shape: SailShape::Rectangle,
        sail_material: SailMaterial::ModernNylon,
        sail_area: 10.0,
        hull_material: HullMaterial::Fiberglass,
        hull_length: 6.0,
        outrigger_arm: 1.0,
        float_volume: 0.05,
    };
    let gale = Wind {
        speed: 18.0,
        angle_attack: 20.0,
    };

    let report = evaluate(&vessel, &gale, &Constants::default()).unwrap();

    assert!(report.heeling_torque > report.righting_torque);
    assert!(!report.is_safe);
}

#[test]
fn equal_torques_are_not_safe() {
    let consts = Constants::default();

    // Build both torques from the same float, so they are bit-identical
    let buoyancy = buoyancy_force(0.05, &consts);
    let righting = righting_torque(buoyancy, 2.0);
    let heeling = heeling_torque(righting, 1.0); // * 1.0 is exact

    assert_eq!(heeling, righting);
    assert!(!TorqueBalance::new(heeling, righting).is_safe());

    // And strictly-less heeling flips it back to safe
    assert!(TorqueBalance::new(heeling - 1.0, righting).is_safe());
}

#[test]
fn evaluation_is_bit_identical_across_calls() {
    let vessel = canoe(SailShape::RightTriangle, SailMaterial::WovenPandanus);
    let wind = Wind {
        speed: 12.5,
        angle_attack: 55.0,
    };
    let consts = Constants::default();

    let first = evaluate(&vessel, &wind, &consts).unwrap();
    let second = evaluate(&vessel, &wind, &consts).unwrap();

    assert_eq!(first, second);
}

// ==================================================================================
// Input validation tests
// ==================================================================================

#[test]
fn out_of_domain_inputs_are_rejected() {
    let consts = Constants::default();
    let vessel = canoe(SailShape::Square, SailMaterial::CottonCanvas);
    let wind = trade_wind();

    let cases: [(&str, Vessel, Wind); 6] = [
        ("sail_area", Vessel { sail_area: 1.0, ..vessel.clone() }, wind.clone()),
        ("wind_speed", vessel.clone(), Wind { speed: 25.0, ..wind.clone() }),
        ("angle_attack", vessel.clone(), Wind { angle_attack: 95.0, ..wind.clone() }),
        ("hull_length", Vessel { hull_length: 2.0, ..vessel.clone() }, wind.clone()),
        ("outrigger_arm", Vessel { outrigger_arm: 5.0, ..vessel.clone() }, wind.clone()),
        ("float_volume", Vessel { float_volume: 0.001, ..vessel.clone() }, wind.clone()),
    ];

    for (field, bad_vessel, bad_wind) in cases {
        let err = evaluate(&bad_vessel, &bad_wind, &consts).unwrap_err();
        match err {
            SimError::OutOfRange { name, .. } => assert_eq!(name, field),
            other => panic!("expected OutOfRange for {field}, got {other:?}"),
        }
    }
}

#[test]
fn nan_inputs_are_rejected() {
    let consts = Constants::default();
    let vessel = canoe(SailShape::Square, SailMaterial::CottonCanvas);
    let wind = Wind {
        speed: f64::NAN,
        angle_attack: 60.0,
    };

    assert!(evaluate(&vessel, &wind, &consts).is_err());
}

// ==================================================================================
// Scenario file tests
// ==================================================================================

#[test]
fn default_scenario_file_matches_the_baseline() {
    let cfg: ScenarioConfig =
        serde_yaml::from_str(include_str!("../scenarios/default.yaml")).unwrap();
    let scenario = Scenario::build_scenario(cfg);

    let report = evaluate(&scenario.vessel, &scenario.wind, &scenario.constants).unwrap();

    assert_close(report.heeling_torque, 122.5, 1e-6);
    assert_close(report.righting_torque, 980.0, 1e-9);
    assert!(report.is_safe);
}

#[test]
fn gale_scenario_file_capsizes() {
    let cfg: ScenarioConfig =
        serde_yaml::from_str(include_str!("../scenarios/monsoon_gale.yaml")).unwrap();
    let scenario = Scenario::build_scenario(cfg);

    // The explicit constants block matches the defaults
    assert_eq!(scenario.constants.air_density, 1.225);

    let report = evaluate(&scenario.vessel, &scenario.wind, &scenario.constants).unwrap();
    assert!(!report.is_safe);
}
