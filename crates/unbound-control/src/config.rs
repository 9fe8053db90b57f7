//! Movement configuration.

use serde::{Deserialize, Serialize};
use unbound_core::ClampBounds;

/// Default movement speed in pixels per second.
pub const DEFAULT_SPEED: f32 = 240.0;

/// Tunable movement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Movement speed in distance units per second.
    pub speed: f32,
    /// Bounds applied after each step, if any.
    pub clamp: Option<ClampBounds>,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            clamp: None,
        }
    }
}

impl MovementConfig {
    /// Create a config with the given speed and no clamping.
    #[must_use]
    pub const fn new(speed: f32) -> Self {
        Self { speed, clamp: None }
    }

    /// Set the clamp bounds.
    #[must_use]
    pub const fn with_clamp(mut self, clamp: ClampBounds) -> Self {
        self.clamp = Some(clamp);
        self
    }
}
