//! Main input manager feeding window events into keyboard state.

use tracing::debug;
use winit::event::WindowEvent;
use winit::keyboard::KeyCode;

use crate::keyboard::{KeySource, KeyboardState};

/// Input manager owning the keyboard state for one window.
///
/// # Usage
///
/// ```ignore
/// // In on_event
/// fn on_event(&mut self, event: &WindowEvent) -> bool {
///     self.input.process_window_event(event)
/// }
///
/// // In update
/// fn update(&mut self, ctx: &AppContext, dt: f32) {
///     self.controller.update(dt, &mut self.position, &self.input);
///
///     // MUST call at end of update
///     self.input.end_frame();
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputManager {
    /// Keyboard input state.
    keyboard: KeyboardState,
}

impl InputManager {
    /// Create a new input manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reference to the keyboard state.
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Get a mutable reference to the keyboard state for scripted input.
    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed. Losing focus drops every
    /// held key, since the matching release events never arrive.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_key_event(event);
                true
            }
            WindowEvent::Focused(false) => {
                debug!("window lost focus, releasing held keys");
                self.keyboard.clear();
                false
            }
            _ => false,
        }
    }

    /// Called at the end of each frame to latch key state for edge detection.
    ///
    /// **IMPORTANT**: This must be called at the end of every update cycle.
    pub fn end_frame(&mut self) {
        self.keyboard.end_frame();
    }

    /// Returns `true` if the key is currently pressed.
    #[must_use]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keyboard.is_pressed(key)
    }

    /// Returns `true` if the key was just pressed this frame.
    #[must_use]
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keyboard.is_just_pressed(key)
    }

    /// Returns `true` if the key was just released this frame.
    #[must_use]
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.keyboard.is_just_released(key)
    }

    /// Clear all input state.
    pub fn clear(&mut self) {
        self.keyboard.clear();
    }
}

impl KeySource for InputManager {
    fn is_down(&self, key: KeyCode) -> bool {
        self.keyboard.is_pressed(key)
    }
}
