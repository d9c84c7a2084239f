use std::collections::VecDeque;

use bevy::app::AppExit;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::control::{dispatch, Adjust, Command};
use crate::simulation::report::{format_sim_time, report, report_probe};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Role};

#[derive(Component)]
struct BodyMarker(Role);

#[derive(Component)]
struct HudText;

/// Recent orbiter positions in meters, so zoom rescales the whole trail
#[derive(Resource, Default)]
struct Trail(VecDeque<NVec2>);

const KEY_BINDINGS: [(KeyCode, Command); 15] = [
    (KeyCode::ArrowUp, Command::IncreaseTimeStep),
    (KeyCode::ArrowDown, Command::DecreaseTimeStep),
    (KeyCode::ArrowRight, Command::NudgeInitialVelocity(Adjust::Up)),
    (KeyCode::ArrowLeft, Command::NudgeInitialVelocity(Adjust::Down)),
    (KeyCode::KeyZ, Command::ScaleG(Adjust::Up)),
    (KeyCode::KeyX, Command::ScaleG(Adjust::Down)),
    (KeyCode::KeyC, Command::ScaleAttractorMass(Adjust::Up)),
    (KeyCode::KeyV, Command::ScaleAttractorMass(Adjust::Down)),
    (KeyCode::KeyB, Command::ScaleOrbiterMass(Adjust::Up)),
    (KeyCode::KeyN, Command::ScaleOrbiterMass(Adjust::Down)),
    (KeyCode::Equal, Command::ZoomIn),
    (KeyCode::Minus, Command::ZoomOut),
    (KeyCode::KeyR, Command::Reset),
    (KeyCode::Space, Command::HardReset),
    (KeyCode::KeyL, Command::Launch),
];

// Body sizes are not to scale
const ATTRACTOR_RADIUS: f32 = 50.0;
const ORBITER_RADIUS: f32 = 10.0;
const PROBE_RADIUS: f32 = 4.0;

pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting viewer, step {} s", scenario.parameters.h0);

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::srgb_u8(25, 25, 25)))
        .init_resource::<Trail>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbit simulation".into(),
                resolution: (1600.0, 1200.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                input_system,
                physics_step_system,
                sync_transforms_system,
                trail_system,
                hud_system,
            )
                .chain(),
        )
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    let bodies = [
        (Role::Attractor, ATTRACTOR_RADIUS, Color::srgb_u8(201, 175, 58), Visibility::Visible),
        (Role::Orbiter, ORBITER_RADIUS, Color::srgb_u8(40, 70, 237), Visibility::Visible),
        (Role::Probe, PROBE_RADIUS, Color::WHITE, Visibility::Hidden),
    ];

    for (role, radius, color, visibility) in bodies {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(0.0, 0.0, 1.0),
                visibility,
                ..default()
            },
            BodyMarker(role),
        ));
    }

    commands.spawn((
        TextBundle::from_section(
            hud_text(&scenario),
            TextStyle {
                font_size: 20.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        }),
        HudText,
    ));
}

fn input_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>, mut trail: ResMut<Trail>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
        return;
    }

    for (key, command) in KEY_BINDINGS {
        if !keys.just_pressed(key) {
            continue;
        }
        if let Err(e) = dispatch(command, &mut *scenario) {
            log::warn!("{command:?} rejected: {e}");
        }
        if matches!(command, Command::Reset | Command::HardReset) {
            trail.0.clear();
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Degraded steps are already logged by the integrator
    if let Err(e) = scenario.advance() {
        log::error!("step failed: {e}");
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyMarker, &mut Transform, &mut Visibility)>) {
    let state = &scenario.state;

    for (BodyMarker(role), mut transform, mut visibility) in &mut query {
        let body = match role {
            Role::Attractor => Some(&state.attractor),
            Role::Orbiter => Some(&state.orbiter),
            Role::Probe => state.probe.as_ref(),
        };

        match body {
            Some(b) => {
                let (x, y) = scenario.view.project(b.x);
                transform.translation.x = x;
                transform.translation.y = y;
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

fn trail_system(mut gizmos: Gizmos, scenario: Res<Scenario>, mut trail: ResMut<Trail>) {
    trail.0.push_back(scenario.state.orbiter.x);
    while trail.0.len() > scenario.view.trail_length {
        trail.0.pop_front();
    }

    for point in &trail.0 {
        let (x, y) = scenario.view.project(*point);
        gizmos.circle_2d(Vec2::new(x, y), 2.0, Color::srgb_u8(100, 100, 255));
    }
}

fn hud_system(scenario: Res<Scenario>, mut query: Query<&mut Text, With<HudText>>) {
    for mut text in &mut query {
        text.sections[0].value = hud_text(&scenario);
    }
}

fn hud_text(scenario: &Scenario) -> String {
    let r = report(&scenario.state);
    let p = &scenario.parameters;
    let s = &scenario.state;

    let mut lines = vec![
        format!("Position: ({:.2e}, {:.2e}) m", r.position.x, r.position.y),
        format!("Velocity: ({:.2e}, {:.2e}) m/s", r.velocity.x, r.velocity.y),
        format!("Distance from attractor: {:.2e} m", r.distance_to_attractor),
        format!("Gravitational force: {:.2e} N", r.gravitational_force_magnitude),
        format!("Acceleration: ({:.2e}, {:.2e}) m/s^2", r.acceleration.x, r.acceleration.y),
        format!("Energy: KE {:.3e} J  PE {:.3e} J  total {:.6e} J", r.kinetic_energy, r.potential_energy, r.total_energy),
        format!("Sim time: {}", format_sim_time(r.t)),
        String::new(),
        format!("[<][>] Restart speed: {:.0} m/s", s.restart_velocity().norm()),
        format!("[^][v] Time step: {:.0} s ({:?})", p.h0, p.integrator),
        "[R] Restart   [SPACE] Hard reset   [L] Launch probe   [+][-] Zoom".to_string(),
        format!("[Z+][X-] G: {:.2e}", s.G),
        format!("[C+][V-] Attractor mass: {:.2e} kg", s.attractor.m),
        format!("[B+][N-] Orbiter mass: {:.2e} kg", s.orbiter.m),
    ];

    if let Some(probe) = report_probe(s) {
        lines.push(format!(
            "Probe: {:.2e} m from attractor, {:.2e} m from orbiter, {:.2e} m/s",
            probe.distance_to_attractor, probe.distance_to_orbiter, probe.speed
        ));
    }
    if r.degraded {
        lines.push("DEGRADED: singular separation, holding cached acceleration".to_string());
    }

    lines.join("\n")
}
