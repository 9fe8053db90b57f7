//! Headless frame harness.
//!
//! Runs the same per-frame sequence as the demo app (sample keys, resolve
//! direction, integrate, clamp, follow) against scripted key frames.

use glam::{IVec2, Vec2, Vec3};
use tracing::debug;
use unbound_control::{DirectionalController, MovementConfig};
use unbound_core::{ground_position, ClampBounds};
use unbound_input::{Direction, KeyBindings, KeyCode, KeyboardState};
use unbound_render::FollowCamera;

use crate::{Result, TestError};

/// One scripted frame: the keys held during it and its duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub keys: Vec<KeyCode>,
    pub dt: f32,
}

impl Frame {
    pub fn new(keys: impl Into<Vec<KeyCode>>, dt: f32) -> Self {
        Self {
            keys: keys.into(),
            dt,
        }
    }

    /// A frame with no keys held.
    #[must_use]
    pub const fn idle(dt: f32) -> Self {
        Self {
            keys: Vec::new(),
            dt,
        }
    }
}

/// Result of one stepped frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRecord {
    pub frame: u64,
    pub direction: Direction,
    pub position: Vec2,
    pub camera_position: Vec3,
}

/// Drives a controller and follow camera from scripted key frames.
pub struct FrameHarness {
    keyboard: KeyboardState,
    held: Vec<KeyCode>,
    controller: DirectionalController,
    camera: FollowCamera,
    position: Vec2,
    frame: u64,
    trace: Vec<FrameRecord>,
}

impl FrameHarness {
    /// Create a harness with the default bindings and no clamping.
    #[must_use]
    pub fn new(speed: f32, start: Vec2) -> Self {
        Self::with_config(MovementConfig::new(speed), start)
    }

    #[must_use]
    pub fn with_config(config: MovementConfig, start: Vec2) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            held: Vec::new(),
            controller: DirectionalController::with_config(config),
            camera: FollowCamera::new(ground_position(start)),
            position: start,
            frame: 0,
            trace: Vec::new(),
        }
    }

    /// Clamp the occupant to a viewport, as the demo does.
    #[must_use]
    pub fn clamped(mut self, viewport: IVec2, occupant: IVec2) -> Self {
        self.controller.set_clamp(Some(ClampBounds { viewport, occupant }));
        self
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.controller = self.controller.with_bindings(bindings);
        self
    }

    /// Hold exactly `keys` for one frame of `dt` seconds.
    pub fn step(&mut self, keys: &[KeyCode], dt: f32) -> Direction {
        for key in self.held.drain(..) {
            self.keyboard.release(key);
        }
        for &key in keys {
            self.keyboard.press(key);
        }
        self.held.extend_from_slice(keys);

        self.controller.update(dt, &mut self.position, &self.keyboard);
        self.camera.update(ground_position(self.position));
        self.keyboard.end_frame();

        let record = FrameRecord {
            frame: self.frame,
            direction: self.controller.direction(),
            position: self.position,
            camera_position: self.camera.camera().position,
        };
        debug!(?record, "frame stepped");
        self.trace.push(record);
        self.frame += 1;
        record.direction
    }

    /// Run a script of frames, rejecting negative or non-finite durations.
    pub fn run(&mut self, frames: &[Frame]) -> Result<()> {
        for (i, frame) in frames.iter().enumerate() {
            if !frame.dt.is_finite() || frame.dt < 0.0 {
                return Err(TestError::Script(format!(
                    "frame {i}: invalid dt {}",
                    frame.dt
                )));
            }
            self.step(&frame.keys, frame.dt);
        }
        Ok(())
    }

    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub const fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn controller(&self) -> &DirectionalController {
        &self.controller
    }

    /// Every frame stepped so far.
    #[must_use]
    pub fn trace(&self) -> &[FrameRecord] {
        &self.trace
    }

    /// Directions resolved so far, in order.
    #[must_use]
    pub fn directions(&self) -> Vec<Direction> {
        self.trace.iter().map(|r| r.direction).collect()
    }
}
