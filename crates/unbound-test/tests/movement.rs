//! End-to-end movement tests: scripted keys through the whole frame pipeline.

use approx::assert_relative_eq;
use glam::{IVec2, Vec2, Vec3};
use unbound_control::MovementConfig;
use unbound_core::ClampBounds;
use unbound_input::{Direction, DirectionKeys, KeyBindings, KeyCode};
use unbound_test::{Frame, FrameHarness};

use KeyCode::{ArrowDown, ArrowLeft, ArrowUp, KeyA, KeyC, KeyD, KeyE, KeyQ, KeyS, KeyW, KeyZ};

const DT: f32 = 1.0 / 60.0;

#[test]
fn scripted_direction_sequence() {
    let mut harness = FrameHarness::new(240.0, Vec2::ZERO);
    harness
        .run(&[
            Frame::idle(DT),
            Frame::new([KeyD], DT),
            Frame::new([KeyW, KeyD], DT),
            Frame::new([KeyA, KeyD], DT),
            Frame::new([KeyS, KeyQ], DT),
            Frame::new([KeyE, KeyZ, KeyC], DT),
            Frame::new([KeyZ, KeyC], DT),
            Frame::new([KeyC], DT),
            Frame::new([ArrowUp, ArrowDown, ArrowLeft], DT),
        ])
        .unwrap();

    let names: Vec<String> = harness
        .directions()
        .iter()
        .map(|d| format!("{d:?}"))
        .collect();
    insta::assert_snapshot!(
        names.join(" "),
        @"None East NorthEast None NorthWest NorthEast SouthWest SouthEast West"
    );
}

#[test]
fn diagonal_covers_same_distance_as_cardinal() {
    let mut straight = FrameHarness::new(240.0, Vec2::ZERO);
    let mut diagonal = FrameHarness::new(240.0, Vec2::ZERO);

    for _ in 0..60 {
        straight.step(&[KeyD], DT);
        diagonal.step(&[KeyW, KeyD], DT);
    }

    assert_relative_eq!(straight.position().length(), 240.0, epsilon = 1e-2);
    assert_relative_eq!(
        diagonal.position().length(),
        straight.position().length(),
        epsilon = 1e-2
    );
    assert!(diagonal.position().x > 0.0);
    assert!(diagonal.position().y < 0.0);
}

#[test]
fn cancelled_axes_and_zero_dt_hold_position() {
    let start = Vec2::new(100.0, 50.0);
    let mut harness = FrameHarness::new(240.0, start);

    harness.step(&[KeyA, KeyD], 1.0);
    harness.step(&[KeyW, KeyS], 1.0);
    harness.step(&[KeyD], 0.0);
    harness.step(&[], 1.0);

    assert_eq!(harness.position(), start);
    for record in harness.trace() {
        assert_eq!(record.position, start);
    }
}

#[test]
fn clamped_player_stays_on_screen() {
    let viewport = IVec2::new(1240, 780);
    let occupant = IVec2::new(32, 48);
    let mut harness = FrameHarness::new(240.0, Vec2::new(600.0, 360.0)).clamped(viewport, occupant);

    for _ in 0..600 {
        harness.step(&[KeyE], DT);
    }
    assert_relative_eq!(harness.position().x, 1208.0);
    assert_relative_eq!(harness.position().y, 0.0);

    for _ in 0..600 {
        harness.step(&[KeyZ], DT);
    }
    assert_relative_eq!(harness.position().x, 0.0);
    assert_relative_eq!(harness.position().y, 732.0);

    for record in harness.trace() {
        assert!(record.position.x >= 0.0 && record.position.x <= 1208.0);
        assert!(record.position.y >= 0.0 && record.position.y <= 732.0);
    }
}

#[test]
fn unsized_viewport_does_not_clamp() {
    let config = MovementConfig::new(100.0).with_clamp(ClampBounds::new(0, 0, 32, 32));
    let mut harness = FrameHarness::with_config(config, Vec2::ZERO);

    harness.step(&[KeyA], 1.0);
    assert_relative_eq!(harness.position().x, -100.0, epsilon = 1e-4);
}

#[test]
fn camera_follows_ground_position() {
    let mut harness = FrameHarness::new(60.0, Vec2::new(10.0, 20.0));
    for _ in 0..30 {
        harness.step(&[KeyD, KeyS], DT);
    }

    let pos = harness.position();
    let camera = harness.camera().camera();
    assert_eq!(camera.target, Vec3::new(pos.x, 0.0, pos.y));
    assert_eq!(camera.position - camera.target, Vec3::new(0.0, 45.0, 50.0));

    let last = harness.trace().last().unwrap();
    assert_eq!(last.camera_position, camera.position);
}

#[test]
fn rebound_keys_drive_movement() {
    let bindings = KeyBindings::builder()
        .bind(DirectionKeys::UP, KeyCode::KeyI)
        .bind(DirectionKeys::LEFT, KeyCode::KeyJ)
        .build();
    let mut harness = FrameHarness::new(100.0, Vec2::ZERO).with_bindings(bindings);

    assert_eq!(harness.step(&[KeyW], 1.0), Direction::None);
    assert_eq!(harness.step(&[KeyCode::KeyI, KeyCode::KeyJ], 1.0), Direction::NorthWest);
    assert!(harness.position().x < 0.0);
    assert!(harness.position().y < 0.0);
}
