//! Directional movement controller.

use glam::Vec2;
use tracing::debug;
use unbound_core::ClampBounds;
use unbound_input::{Direction, DirectionalInput, KeyBindings, KeySource};

use crate::config::MovementConfig;

/// Advance `pos` one explicit Euler step along `direction`.
///
/// Diagonals move at the same speed as cardinals; `Direction::None` and a
/// zero `dt` leave `pos` untouched.
#[inline]
pub fn integrate(direction: Direction, speed: f32, dt: f32, pos: &mut Vec2) {
    *pos += direction.vector() * speed * dt;
}

/// Applies 8-way keyboard input to a caller-owned 2D position.
///
/// Each frame it samples the bound keys, resolves a [`Direction`], moves the
/// position at constant speed and optionally clamps it to the configured
/// bounds. The last direction is kept for facing and animation queries.
#[derive(Debug, Clone, Default)]
pub struct DirectionalController {
    input: DirectionalInput,
    direction: Direction,
    config: MovementConfig,
}

impl DirectionalController {
    /// Create a controller with the default key layout and no clamping.
    #[must_use]
    pub fn new(speed: f32) -> Self {
        Self::with_config(MovementConfig::new(speed))
    }

    /// Create a controller from a full movement config.
    #[must_use]
    pub fn with_config(config: MovementConfig) -> Self {
        Self {
            input: DirectionalInput::new(),
            direction: Direction::None,
            config,
        }
    }

    /// Replace the key bindings.
    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.input = DirectionalInput::with_bindings(bindings);
        self
    }

    /// Sample input from `keys`, then move `pos` for a frame of `dt` seconds.
    pub fn update<S: KeySource + ?Sized>(&mut self, dt: f32, pos: &mut Vec2, keys: &S) {
        let direction = self.input.update(keys);
        self.apply(direction, dt, pos);
    }

    /// Move `pos` along an already resolved direction.
    pub fn apply(&mut self, direction: Direction, dt: f32, pos: &mut Vec2) {
        if direction != self.direction {
            debug!(from = ?self.direction, to = ?direction, "direction changed");
        }
        self.direction = direction;

        integrate(direction, self.config.speed, dt, pos);
        if let Some(bounds) = &self.config.clamp {
            bounds.clamp(pos);
        }
    }

    /// Last resolved direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Movement speed in units per second.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.config.speed
    }

    /// Set movement speed in units per second.
    pub fn set_speed(&mut self, speed: f32) {
        self.config.speed = speed;
    }

    /// Set or remove the clamp bounds.
    pub fn set_clamp(&mut self, clamp: Option<ClampBounds>) {
        self.config.clamp = clamp;
    }

    /// Current movement config.
    #[must_use]
    pub const fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Replace the movement config.
    pub fn set_config(&mut self, config: MovementConfig) {
        self.config = config;
    }

    /// Get a mutable reference to the directional input for runtime rebinding.
    pub fn input_mut(&mut self) -> &mut DirectionalInput {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use unbound_input::KeyCode;

    const NO_KEYS: [KeyCode; 0] = [];

    #[test]
    fn moves_right_at_speed() {
        let mut controller = DirectionalController::new(100.0);
        let mut pos = Vec2::new(10.0, 20.0);

        controller.update(0.5, &mut pos, &[KeyCode::KeyD]);
        assert_eq!(controller.direction(), Direction::East);
        assert_relative_eq!(pos.x, 60.0, epsilon = 1e-4);
        assert_relative_eq!(pos.y, 20.0);
    }

    #[test]
    fn none_does_not_move() {
        let mut controller = DirectionalController::new(100.0);
        let mut pos = Vec2::new(5.0, 5.0);

        controller.update(10.0, &mut pos, &NO_KEYS);
        assert_eq!(controller.direction(), Direction::None);
        assert_eq!(pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn zero_dt_never_moves() {
        let mut controller = DirectionalController::new(240.0);
        for direction in Direction::ALL {
            let mut pos = Vec2::new(3.0, 4.0);
            controller.apply(direction, 0.0, &mut pos);
            assert_eq!(pos, Vec2::new(3.0, 4.0));
        }
    }

    #[test]
    fn diagonal_distance_matches_cardinal() {
        let mut controller = DirectionalController::new(200.0);

        let mut diagonal = Vec2::ZERO;
        controller.update(0.25, &mut diagonal, &[KeyCode::KeyW, KeyCode::KeyA]);
        assert_eq!(controller.direction(), Direction::NorthWest);
        assert_relative_eq!(diagonal.length(), 50.0, epsilon = 1e-3);
        assert!(diagonal.x < 0.0 && diagonal.y < 0.0);
    }

    #[test]
    fn clamps_when_configured() {
        let config = MovementConfig::new(100.0).with_clamp(ClampBounds::new(800, 600, 50, 50));
        let mut controller = DirectionalController::with_config(config);

        let mut pos = Vec2::new(0.0, 100.0);
        controller.apply(Direction::West, 0.1, &mut pos);
        assert_relative_eq!(pos.x, 0.0);

        let mut pos = Vec2::new(740.0, 100.0);
        controller.apply(Direction::East, 0.2, &mut pos);
        assert_relative_eq!(pos.x, 750.0);
    }

    #[test]
    fn disabled_bounds_do_not_clamp() {
        let mut controller = DirectionalController::new(100.0);
        controller.set_clamp(Some(ClampBounds::new(0, 0, 50, 50)));

        let mut pos = Vec2::new(0.0, 0.0);
        controller.apply(Direction::NorthWest, 1.0, &mut pos);
        assert!(pos.x < 0.0 && pos.y < 0.0);
    }

    #[test]
    fn speed_setter() {
        let mut controller = DirectionalController::new(0.0);
        assert_eq!(controller.speed(), 0.0);

        let mut pos = Vec2::ZERO;
        controller.apply(Direction::South, 1.0, &mut pos);
        assert_eq!(pos, Vec2::ZERO);

        controller.set_speed(30.0);
        controller.apply(Direction::South, 1.0, &mut pos);
        assert_relative_eq!(pos.y, 30.0);
        assert_eq!(controller.config().speed, 30.0);
    }

    #[test]
    fn custom_bindings_drive_movement() {
        let bindings = KeyBindings::builder()
            .bind(unbound_input::DirectionKeys::DOWN, KeyCode::KeyK)
            .build();
        let mut controller = DirectionalController::new(10.0).with_bindings(bindings);

        let mut pos = Vec2::ZERO;
        controller.update(1.0, &mut pos, &[KeyCode::KeyK, KeyCode::KeyS]);
        assert_eq!(controller.direction(), Direction::South);
        assert_relative_eq!(pos.y, 10.0);
    }
}
