//! Keyboard input state tracking.

use hashbrown::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Anything that can report whether a physical key is held down.
///
/// Direction sampling is written against this trait so it can be driven by
/// the live keyboard or by scripted input in tests.
pub trait KeySource {
    /// Returns `true` if the key is currently held down.
    fn is_down(&self, key: KeyCode) -> bool;
}

/// Keyboard input state.
///
/// Tracks which keys are held now and which were held at the end of the
/// previous frame, so single-frame press edges can be detected.
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    /// Keys currently held down.
    held: HashSet<KeyCode>,
    /// Keys held at the end of the previous frame.
    previous: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key event.
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };

        match event.state {
            ElementState::Pressed => self.press(key_code),
            ElementState::Released => self.release(key_code),
        }
    }

    /// Mark a key as held.
    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    /// Mark a key as released.
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Returns `true` if the key is currently pressed.
    #[must_use]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Returns `true` if the key went down since the previous frame.
    #[must_use]
    pub fn is_just_pressed(&self, key: KeyCode) -> bool {
        self.held.contains(&key) && !self.previous.contains(&key)
    }

    /// Returns `true` if the key went up since the previous frame.
    #[must_use]
    pub fn is_just_released(&self, key: KeyCode) -> bool {
        !self.held.contains(&key) && self.previous.contains(&key)
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Called at end of frame to remember what was held.
    pub fn end_frame(&mut self) {
        self.previous.clone_from(&self.held);
    }

    /// Clear all key states.
    pub fn clear(&mut self) {
        self.held.clear();
        self.previous.clear();
    }
}

impl KeySource for KeyboardState {
    fn is_down(&self, key: KeyCode) -> bool {
        self.is_pressed(key)
    }
}

impl KeySource for [KeyCode] {
    fn is_down(&self, key: KeyCode) -> bool {
        self.contains(&key)
    }
}

impl<const N: usize> KeySource for [KeyCode; N] {
    fn is_down(&self, key: KeyCode) -> bool {
        self.contains(&key)
    }
}
