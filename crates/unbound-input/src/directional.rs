//! Per-frame 8-way directional input.

use tracing::debug;

use crate::bindings::KeyBindings;
use crate::direction::Direction;
use crate::keyboard::KeySource;
use crate::keys::DirectionKeys;

/// Samples bound keys once per frame and resolves them into a [`Direction`].
///
/// The result depends only on the keys held in the sampled frame; nothing
/// carries over between frames.
#[derive(Debug, Clone, Default)]
pub struct DirectionalInput {
    bindings: KeyBindings,
    /// Logical keys seen by the last `update`.
    keys: DirectionKeys,
}

impl DirectionalInput {
    /// Create a directional input with the default key layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directional input with custom bindings.
    #[must_use]
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            keys: DirectionKeys::empty(),
        }
    }

    /// Get a reference to the key bindings.
    #[must_use]
    pub const fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Get a mutable reference to the key bindings for runtime rebinding.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Sample `source` and resolve this frame's direction.
    pub fn update<S: KeySource + ?Sized>(&mut self, source: &S) -> Direction {
        let keys = self.bindings.sample(source);
        if keys != self.keys {
            debug!(?keys, "direction keys changed");
        }
        self.keys = keys;
        Direction::resolve(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn resolves_default_layout() {
        let mut input = DirectionalInput::new();
        assert_eq!(input.update(&[KeyCode::KeyW]), Direction::North);
        assert_eq!(input.update(&[KeyCode::ArrowDown]), Direction::South);
        assert_eq!(input.update(&[KeyCode::KeyW, KeyCode::KeyD]), Direction::NorthEast);
        assert_eq!(input.update(&[KeyCode::KeyA, KeyCode::ArrowRight]), Direction::None);
        assert_eq!(input.update(&[KeyCode::KeyZ, KeyCode::KeyD]), Direction::SouthWest);
    }

    #[test]
    fn no_memory_between_frames() {
        let mut input = DirectionalInput::new();
        assert_eq!(input.update(&[KeyCode::KeyQ]), Direction::NorthWest);
        assert_eq!(input.update(&[] as &[KeyCode]), Direction::None);
        assert_eq!(input.keys, DirectionKeys::empty());

        let mut fresh = DirectionalInput::new();
        let held = [KeyCode::ArrowLeft, KeyCode::KeyS];
        assert_eq!(input.update(&held), fresh.update(&held));
    }

    #[test]
    fn custom_bindings() {
        let bindings = KeyBindings::builder()
            .bind(DirectionKeys::LEFT, KeyCode::KeyJ)
            .bind(DirectionKeys::RIGHT, KeyCode::KeyL)
            .build();
        let mut input = DirectionalInput::with_bindings(bindings);

        assert_eq!(input.update(&[KeyCode::KeyJ]), Direction::West);
        assert_eq!(input.update(&[KeyCode::KeyA]), Direction::None);

        input.bindings_mut().bind(DirectionKeys::SOUTH_EAST, KeyCode::KeyM);
        assert_eq!(input.update(&[KeyCode::KeyJ, KeyCode::KeyM]), Direction::SouthEast);
    }
}
