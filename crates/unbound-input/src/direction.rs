//! Discrete 8-way movement direction.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::keys::DirectionKeys;

/// One of the eight compass directions, or none.
///
/// Uses screen conventions: north is up (`-y`), east is right (`+x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// No movement.
    #[default]
    None,
    North,
    South,
    East,
    West,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

/// Diagonal override keys in the order they are checked; the first held key wins.
const OVERRIDE_PRIORITY: [(DirectionKeys, Direction); 4] = [
    (DirectionKeys::NORTH_WEST, Direction::NorthWest),
    (DirectionKeys::NORTH_EAST, Direction::NorthEast),
    (DirectionKeys::SOUTH_WEST, Direction::SouthWest),
    (DirectionKeys::SOUTH_EAST, Direction::SouthEast),
];

impl Direction {
    /// Every direction, `None` first.
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Map horizontal and vertical axis values to a direction.
    ///
    /// Only the sign of each component matters.
    #[must_use]
    pub const fn from_axes(horizontal: i8, vertical: i8) -> Self {
        match (horizontal.signum(), vertical.signum()) {
            (0, 0) => Self::None,
            (-1, 0) => Self::West,
            (1, 0) => Self::East,
            (0, -1) => Self::North,
            (0, 1) => Self::South,
            (-1, -1) => Self::NorthWest,
            (1, -1) => Self::NorthEast,
            (-1, 1) => Self::SouthWest,
            _ => Self::SouthEast,
        }
    }

    /// Resolve the held logical keys into a single direction.
    ///
    /// Diagonal override keys beat the axis keys outright, checked
    /// north-west, north-east, south-west, south-east. Without an override,
    /// opposing axis keys cancel and the remaining signs pick the direction.
    #[must_use]
    pub fn resolve(keys: DirectionKeys) -> Self {
        OVERRIDE_PRIORITY
            .iter()
            .find(|(key, _)| keys.contains(*key))
            .map_or_else(
                || Self::from_axes(keys.horizontal(), keys.vertical()),
                |&(_, direction)| direction,
            )
    }

    /// Axis components as `(horizontal, vertical)`, each in `-1..=1`.
    #[must_use]
    pub const fn axes(self) -> (i8, i8) {
        match self {
            Self::None => (0, 0),
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
            Self::NorthEast => (1, -1),
            Self::SouthWest => (-1, 1),
            Self::SouthEast => (1, 1),
        }
    }

    /// Movement vector for this direction.
    ///
    /// Cardinals are axis-aligned unit vectors and diagonals are scaled by
    /// `1/sqrt(2)` per axis, so every direction except `None` has length 1.
    #[must_use]
    pub fn vector(self) -> Vec2 {
        let (h, v) = self.axes();
        let scale = if self.is_diagonal() { FRAC_1_SQRT_2 } else { 1.0 };
        Vec2::new(f32::from(h), f32::from(v)) * scale
    }

    /// Returns `true` for the four diagonal directions.
    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::NorthWest | Self::NorthEast | Self::SouthWest | Self::SouthEast
        )
    }

    /// Returns `true` unless this is [`Direction::None`].
    #[inline]
    #[must_use]
    pub const fn is_moving(self) -> bool {
        !matches!(self, Self::None)
    }
}
