//! Physical key to logical direction key bindings.

use hashbrown::HashMap;
use winit::keyboard::KeyCode;

use crate::keyboard::KeySource;
use crate::keys::DirectionKeys;

/// Maps physical keys onto logical [`DirectionKeys`].
///
/// Several physical keys may drive the same logical key (e.g. `A` and
/// `ArrowLeft`); a logical key counts as held if any of them is down.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Logical keys driven by each physical key.
    bindings: HashMap<KeyCode, DirectionKeys>,
}

impl Default for KeyBindings {
    /// WASD and arrow keys for the axes, `Q`/`E`/`Z`/`C` for the diagonals.
    fn default() -> Self {
        Self::builder()
            .bind_many(DirectionKeys::LEFT, [KeyCode::KeyA, KeyCode::ArrowLeft])
            .bind_many(DirectionKeys::RIGHT, [KeyCode::KeyD, KeyCode::ArrowRight])
            .bind_many(DirectionKeys::UP, [KeyCode::KeyW, KeyCode::ArrowUp])
            .bind_many(DirectionKeys::DOWN, [KeyCode::KeyS, KeyCode::ArrowDown])
            .bind(DirectionKeys::NORTH_WEST, KeyCode::KeyQ)
            .bind(DirectionKeys::NORTH_EAST, KeyCode::KeyE)
            .bind(DirectionKeys::SOUTH_WEST, KeyCode::KeyZ)
            .bind(DirectionKeys::SOUTH_EAST, KeyCode::KeyC)
            .build()
    }
}

impl KeyBindings {
    /// Create an empty binding set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Start building a binding set from scratch.
    #[must_use]
    pub fn builder() -> KeyBindingsBuilder {
        KeyBindingsBuilder::new()
    }

    /// Bind a physical key to a logical key.
    pub fn bind(&mut self, logical: DirectionKeys, key: KeyCode) {
        *self.bindings.entry(key).or_default() |= logical;
    }

    /// Remove a physical key from a logical key.
    pub fn unbind(&mut self, logical: DirectionKeys, key: KeyCode) {
        if let Some(flags) = self.bindings.get_mut(&key) {
            flags.remove(logical);
            if flags.is_empty() {
                self.bindings.remove(&key);
            }
        }
    }

    /// Remove every physical key bound to a logical key.
    pub fn clear_bindings(&mut self, logical: DirectionKeys) {
        self.bindings.retain(|_, flags| {
            flags.remove(logical);
            !flags.is_empty()
        });
    }

    /// Physical keys bound to a logical key, in no particular order.
    #[must_use]
    pub fn keys_for(&self, logical: DirectionKeys) -> Vec<KeyCode> {
        self.bindings
            .iter()
            .filter(|(_, flags)| flags.intersects(logical))
            .map(|(key, _)| *key)
            .collect()
    }

    /// Sample the logical keys held in `source`.
    pub fn sample<S: KeySource + ?Sized>(&self, source: &S) -> DirectionKeys {
        self.bindings
            .iter()
            .filter(|(key, _)| source.is_down(**key))
            .fold(DirectionKeys::empty(), |held, (_, flags)| held | *flags)
    }
}

/// Builder for creating key bindings with a fluent API.
#[derive(Debug)]
pub struct KeyBindingsBuilder {
    bindings: KeyBindings,
}

impl Default for KeyBindingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindingsBuilder {
    /// Create a new builder with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::empty(),
        }
    }

    /// Bind a physical key to a logical key.
    #[must_use]
    pub fn bind(mut self, logical: DirectionKeys, key: KeyCode) -> Self {
        self.bindings.bind(logical, key);
        self
    }

    /// Bind several physical keys to a logical key.
    #[must_use]
    pub fn bind_many(
        mut self,
        logical: DirectionKeys,
        keys: impl IntoIterator<Item = KeyCode>,
    ) -> Self {
        for key in keys {
            self.bindings.bind(logical, key);
        }
        self
    }

    /// Build the binding set.
    #[must_use]
    pub fn build(self) -> KeyBindings {
        self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let bindings = KeyBindings::default();

        let mut left = bindings.keys_for(DirectionKeys::LEFT);
        left.sort_by_key(|key| format!("{key:?}"));
        assert_eq!(left, vec![KeyCode::ArrowLeft, KeyCode::KeyA]);
        assert_eq!(bindings.keys_for(DirectionKeys::NORTH_WEST), vec![KeyCode::KeyQ]);
        assert_eq!(bindings.keys_for(DirectionKeys::SOUTH_EAST), vec![KeyCode::KeyC]);
    }

    #[test]
    fn primary_and_alternate_are_ored() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.sample(&[KeyCode::KeyA]), DirectionKeys::LEFT);
        assert_eq!(bindings.sample(&[KeyCode::ArrowLeft]), DirectionKeys::LEFT);
        assert_eq!(
            bindings.sample(&[KeyCode::KeyA, KeyCode::ArrowLeft]),
            DirectionKeys::LEFT
        );
        assert_eq!(
            bindings.sample(&[KeyCode::ArrowUp, KeyCode::KeyD]),
            DirectionKeys::UP | DirectionKeys::RIGHT
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.sample(&[KeyCode::Space, KeyCode::KeyX]),
            DirectionKeys::empty()
        );
    }

    #[test]
    fn unbind_and_clear() {
        let mut bindings = KeyBindings::default();
        bindings.unbind(DirectionKeys::LEFT, KeyCode::KeyA);
        assert_eq!(bindings.sample(&[KeyCode::KeyA]), DirectionKeys::empty());
        assert_eq!(bindings.sample(&[KeyCode::ArrowLeft]), DirectionKeys::LEFT);

        bindings.clear_bindings(DirectionKeys::LEFT);
        assert!(bindings.keys_for(DirectionKeys::LEFT).is_empty());
        assert_eq!(bindings.sample(&[KeyCode::KeyD]), DirectionKeys::RIGHT);
    }

    #[test]
    fn one_key_may_drive_several_logical_keys() {
        let bindings = KeyBindings::builder()
            .bind(DirectionKeys::UP, KeyCode::Numpad7)
            .bind(DirectionKeys::LEFT, KeyCode::Numpad7)
            .build();
        assert_eq!(
            bindings.sample(&[KeyCode::Numpad7]),
            DirectionKeys::UP | DirectionKeys::LEFT
        );

        let mut bindings = bindings;
        bindings.unbind(DirectionKeys::UP, KeyCode::Numpad7);
        assert_eq!(bindings.sample(&[KeyCode::Numpad7]), DirectionKeys::LEFT);
    }
}
