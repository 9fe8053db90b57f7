//! Math utilities and helpers.

use glam::{IVec2, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Map a screen-space position onto the world ground plane.
///
/// Screen `x` becomes world `X`, screen `y` becomes world `Z`, and the
/// result sits on `Y = 0`.
#[inline]
pub const fn ground_position(screen: Vec2) -> Vec3 {
    Vec3::new(screen.x, 0.0, screen.y)
}

/// Bounds that keep an occupant fully inside a viewport.
///
/// Sizes are signed so that callers can pass raw platform values through;
/// anything that fails the enabling rule (see [`ClampBounds::is_enabled`])
/// simply turns clamping off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampBounds {
    /// Viewport size in pixels.
    pub viewport: IVec2,
    /// Size of the thing being kept on screen (e.g. a sprite).
    pub occupant: IVec2,
}

impl ClampBounds {
    /// Bounds that never clamp.
    pub const DISABLED: Self = Self {
        viewport: IVec2::ZERO,
        occupant: IVec2::ZERO,
    };

    /// Create bounds from viewport and occupant sizes.
    #[inline]
    pub const fn new(
        viewport_width: i32,
        viewport_height: i32,
        occupant_width: i32,
        occupant_height: i32,
    ) -> Self {
        Self {
            viewport: IVec2::new(viewport_width, viewport_height),
            occupant: IVec2::new(occupant_width, occupant_height),
        }
    }

    /// Returns `true` when the viewport is strictly positive and the occupant
    /// is non-negative on both axes.
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.viewport.x > 0
            && self.viewport.y > 0
            && self.occupant.x >= 0
            && self.occupant.y >= 0
    }

    /// Largest position the occupant's top-left corner may take.
    ///
    /// May be negative when the occupant is larger than the viewport.
    #[inline]
    pub fn max_position(&self) -> Vec2 {
        (self.viewport - self.occupant).as_vec2()
    }

    /// Clamp `pos` componentwise to `[0, viewport - occupant]`.
    ///
    /// Lower bound is applied first, so an occupant wider than the viewport
    /// ends up pinned at the (negative) upper bound.
    pub fn clamp(&self, pos: &mut Vec2) {
        if !self.is_enabled() {
            return;
        }
        let max = self.max_position();
        *pos = pos.max(Vec2::ZERO).min(max);
    }
}
