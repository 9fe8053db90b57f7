//! Logical direction key flags.

use bitflags::bitflags;

bitflags! {
    /// Logical keys that feed direction resolution.
    ///
    /// The four axis keys are combined into horizontal and vertical axis
    /// values; the four diagonal keys force a diagonal outright.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectionKeys: u8 {
        /// Move left (towards -x).
        const LEFT       = 0b0000_0001;
        /// Move right (towards +x).
        const RIGHT      = 0b0000_0010;
        /// Move up (towards -y).
        const UP         = 0b0000_0100;
        /// Move down (towards +y).
        const DOWN       = 0b0000_1000;
        /// Force the north-west diagonal.
        const NORTH_WEST = 0b0001_0000;
        /// Force the north-east diagonal.
        const NORTH_EAST = 0b0010_0000;
        /// Force the south-west diagonal.
        const SOUTH_WEST = 0b0100_0000;
        /// Force the south-east diagonal.
        const SOUTH_EAST = 0b1000_0000;

        /// All four axis keys.
        const AXES = Self::LEFT.bits() | Self::RIGHT.bits() | Self::UP.bits() | Self::DOWN.bits();
        /// All four diagonal override keys.
        const OVERRIDES = Self::NORTH_WEST.bits()
            | Self::NORTH_EAST.bits()
            | Self::SOUTH_WEST.bits()
            | Self::SOUTH_EAST.bits();
    }
}

const fn axis(positive: bool, negative: bool) -> i8 {
    match (positive, negative) {
        (true, false) => 1,
        (false, true) => -1,
        _ => 0,
    }
}

impl DirectionKeys {
    /// Horizontal axis value: `+1` right, `-1` left, `0` for both or neither.
    #[inline]
    #[must_use]
    pub const fn horizontal(self) -> i8 {
        axis(self.contains(Self::RIGHT), self.contains(Self::LEFT))
    }

    /// Vertical axis value: `+1` down, `-1` up, `0` for both or neither.
    #[inline]
    #[must_use]
    pub const fn vertical(self) -> i8 {
        axis(self.contains(Self::DOWN), self.contains(Self::UP))
    }

    /// Returns `true` if any diagonal override key is held.
    #[inline]
    #[must_use]
    pub const fn has_override(self) -> bool {
        self.intersects(Self::OVERRIDES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_values() {
        assert_eq!(DirectionKeys::RIGHT.horizontal(), 1);
        assert_eq!(DirectionKeys::LEFT.horizontal(), -1);
        assert_eq!(DirectionKeys::UP.vertical(), -1);
        assert_eq!(DirectionKeys::DOWN.vertical(), 1);
        assert_eq!(DirectionKeys::empty().horizontal(), 0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let keys = DirectionKeys::LEFT | DirectionKeys::RIGHT | DirectionKeys::UP;
        assert_eq!(keys.horizontal(), 0);
        assert_eq!(keys.vertical(), -1);

        let keys = DirectionKeys::UP | DirectionKeys::DOWN;
        assert_eq!(keys.vertical(), 0);
    }

    #[test]
    fn override_detection() {
        assert!(!DirectionKeys::AXES.has_override());
        assert!(DirectionKeys::SOUTH_EAST.has_override());
        assert!((DirectionKeys::LEFT | DirectionKeys::NORTH_EAST).has_override());
    }
}
