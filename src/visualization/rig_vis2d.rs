use bevy::prelude::*;

use crate::simulation::engine::{
    evaluate, ANGLE_ATTACK_RANGE, OUTRIGGER_ARM_RANGE, SAIL_AREA_RANGE, WIND_SPEED_RANGE,
};
use crate::simulation::coefficients::{SailMaterial, SailShape};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::StabilityReport;

/// Marker for the HUD text block
#[derive(Component)]
struct HudText;

/// Latest evaluated report; rewritten whenever the scenario changes
#[derive(Resource)]
struct CurrentReport(StabilityReport);

/// Pixel length the largest force arrow is normalized to
const ARROW_SPAN: f32 = 280.0;

/// Pixel height the larger torque bar is normalized to
const BAR_SPAN: f32 = 240.0;

/// Where the force-vector origin sits on screen
const VECTOR_ORIGIN: Vec2 = Vec2::new(-320.0, -160.0);

/// X positions of the two torque bars
const BAR_X_HEELING: f32 = 240.0;
const BAR_X_RIGHTING: f32 = 360.0;
const BAR_WIDTH: f32 = 70.0;
const BAR_BASE_Y: f32 = -180.0;

pub fn run_2d(scenario: Scenario) {
    // Initial evaluation up front so every system can assume a report exists
    let report = match evaluate(&scenario.vessel, &scenario.wind, &scenario.constants) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("run_2d: scenario rejected: {e}");
            return;
        }
    };

    println!("run_2d: starting Bevy viewer, adjust the rig with the keyboard");

    App::new()
        .insert_resource(scenario)
        .insert_resource(CurrentReport(report))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_hud_system)
        .add_systems(
            Update,
            (
                param_input_system,
                recompute_system,
                draw_vectors_system,
                draw_torque_bars_system,
                hud_text_system,
            ),
        )
        .run();
}

fn setup_hud_system(mut commands: Commands) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // HUD: one text block, rewritten every frame from the current report
    commands.spawn((
        TextBundle::from_section(
            String::new(),
            TextStyle {
                font_size: 18.0,
                color: Color::srgb(0.9, 0.9, 0.9),
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        HudText,
    ));
}

/// Keyboard parameter adjustment. Each change re-triggers one full
/// evaluation of the pure core via change detection; all values stay
/// clamped to their documented domains so evaluate() cannot reject them
fn param_input_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    // Wind speed: up/down arrows
    if keys.pressed(KeyCode::ArrowUp) {
        let v = (scenario.wind.speed + 0.1).min(WIND_SPEED_RANGE.1);
        scenario.wind.speed = v;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        let v = (scenario.wind.speed - 0.1).max(WIND_SPEED_RANGE.0);
        scenario.wind.speed = v;
    }

    // Angle of attack: left/right arrows
    if keys.pressed(KeyCode::ArrowRight) {
        let a = (scenario.wind.angle_attack + 0.5).min(ANGLE_ATTACK_RANGE.1);
        scenario.wind.angle_attack = a;
    }
    if keys.pressed(KeyCode::ArrowLeft) {
        let a = (scenario.wind.angle_attack - 0.5).max(ANGLE_ATTACK_RANGE.0);
        scenario.wind.angle_attack = a;
    }

    // Sail area: A bigger, Z smaller
    if keys.pressed(KeyCode::KeyA) {
        let s = (scenario.vessel.sail_area + 0.05).min(SAIL_AREA_RANGE.1);
        scenario.vessel.sail_area = s;
    }
    if keys.pressed(KeyCode::KeyZ) {
        let s = (scenario.vessel.sail_area - 0.05).max(SAIL_AREA_RANGE.0);
        scenario.vessel.sail_area = s;
    }

    // Outrigger arm: bracket keys
    if keys.pressed(KeyCode::BracketRight) {
        let d = (scenario.vessel.outrigger_arm + 0.02).min(OUTRIGGER_ARM_RANGE.1);
        scenario.vessel.outrigger_arm = d;
    }
    if keys.pressed(KeyCode::BracketLeft) {
        let d = (scenario.vessel.outrigger_arm - 0.02).max(OUTRIGGER_ARM_RANGE.0);
        scenario.vessel.outrigger_arm = d;
    }

    // Cycle sail shape / material
    if keys.just_pressed(KeyCode::Tab) {
        scenario.vessel.sail_shape = next_shape(scenario.vessel.sail_shape);
    }
    if keys.just_pressed(KeyCode::KeyM) {
        scenario.vessel.sail_material = next_material(scenario.vessel.sail_material);
    }
}

fn next_shape(shape: SailShape) -> SailShape {
    match shape {
        SailShape::InvertedTriangle => SailShape::Square,
        SailShape::Square => SailShape::Rectangle,
        SailShape::Rectangle => SailShape::RightTriangle,
        SailShape::RightTriangle => SailShape::InvertedTriangle,
    }
}

fn next_material(material: SailMaterial) -> SailMaterial {
    match material {
        SailMaterial::WovenPandanus => SailMaterial::CottonCanvas,
        SailMaterial::CottonCanvas => SailMaterial::ModernNylon,
        SailMaterial::ModernNylon => SailMaterial::WovenPandanus,
    }
}

/// Re-run the pure evaluation whenever any parameter changed
fn recompute_system(scenario: Res<Scenario>, mut report: ResMut<CurrentReport>) {
    if scenario.is_changed() {
        if let Ok(r) = evaluate(&scenario.vessel, &scenario.wind, &scenario.constants) {
            report.0 = r;
        }
    }
}

/// Force vectors as gizmo arrows: side (red) along +X, forward (green)
/// along +Y, resultant (blue). Lengths are normalized per frame so the
/// largest component spans ARROW_SPAN pixels
fn draw_vectors_system(report: Res<CurrentReport>, mut gizmos: Gizmos) {
    let side = report.0.side_force() as f32;
    let forward = report.0.forward_force() as f32;

    // Same normalization the axes use: never divide by ~zero force
    let limit = side.max(forward).max(10.0);
    let px_per_newton = ARROW_SPAN / limit;

    let o = VECTOR_ORIGIN;
    let side_tip = o + Vec2::new(side * px_per_newton, 0.0);
    let forward_tip = o + Vec2::new(0.0, forward * px_per_newton);
    let resultant_tip = o + Vec2::new(side * px_per_newton, forward * px_per_newton);

    gizmos.arrow_2d(o, side_tip, Color::srgb(1.0, 0.2, 0.2));
    gizmos.arrow_2d(o, forward_tip, Color::srgb(0.2, 1.0, 0.2));
    gizmos.arrow_2d(o, resultant_tip, Color::srgb(0.3, 0.5, 1.0));
}

/// Torque comparison: heeling (red) vs righting (green) bars, normalized
/// so the larger bar is BAR_SPAN pixels tall
fn draw_torque_bars_system(report: Res<CurrentReport>, mut gizmos: Gizmos) {
    let heeling = report.0.heeling_torque as f32;
    let righting = report.0.righting_torque as f32;

    let max_torque = heeling.max(righting).max(1.0);

    for (x, torque, color) in [
        (BAR_X_HEELING, heeling, Color::srgb(1.0, 0.2, 0.2)),
        (BAR_X_RIGHTING, righting, Color::srgb(0.2, 1.0, 0.2)),
    ] {
        let h = torque / max_torque * BAR_SPAN;
        // rect_2d takes the center, so lift it half the height off the base
        gizmos.rect_2d(
            Vec2::new(x, BAR_BASE_Y + h / 2.0),
            0.0,
            Vec2::new(BAR_WIDTH, h),
            color,
        );
    }
}

fn hud_text_system(
    scenario: Res<Scenario>,
    report: Res<CurrentReport>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    let r = &report.0;
    let verdict = if r.is_safe {
        "SAFE TO SAIL"
    } else {
        "CAPSIZE WARNING"
    };

    for mut text in &mut query {
        text.sections[0].value = format!(
            "{verdict}\n\
             sail: {} | {} | {:.1} m^2  (Tab / M / A,Z)\n\
             wind: {:.1} m/s at {:.1} deg  (arrows)\n\
             outrigger arm: {:.2} m  ([ ])\n\
             heeling:  {:.1} N*m\n\
             righting: {:.1} N*m\n\
             forward drive: {:.1} N",
            scenario.vessel.sail_shape,
            scenario.vessel.sail_material,
            scenario.vessel.sail_area,
            scenario.wind.speed,
            scenario.wind.angle_attack,
            scenario.vessel.outrigger_arm,
            r.heeling_torque,
            r.righting_torque,
            r.forward_force(),
        );
    }
}
