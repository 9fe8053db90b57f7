//! Backend-agnostic list of draw primitives for one frame.

use glam::{Vec2, Vec3};

/// RGBA color, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Self = Self::rgb(230, 41, 55);
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    pub const BLUE: Self = Self::rgb(0, 121, 241);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Self = Self::rgb(200, 200, 200);
    pub const DARK_GRAY: Self = Self::rgb(80, 80, 80);
    pub const RAY_WHITE: Self = Self::rgb(245, 245, 245);

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Components as normalized floats, for GPU upload.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|c| f32::from(c) / 255.0)
    }
}

/// A single thing to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// 3D line segment.
    Line { from: Vec3, to: Vec3, color: Color },
    /// Solid axis-aligned cube.
    Cube { center: Vec3, size: Vec3, color: Color },
    /// Wireframe axis-aligned cube.
    CubeWires { center: Vec3, size: Vec3, color: Color },
    /// Horizontal plane on the XZ axes.
    Plane { center: Vec3, size: Vec2, color: Color },
    /// Screen-space text, positioned in pixels from the top-left.
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: Color,
    },
}

impl Primitive {
    /// Returns `true` for primitives drawn in world space.
    pub const fn is_world(&self) -> bool {
        !matches!(self, Self::Text { .. })
    }
}

/// Ordered primitives for one frame plus the clear color.
#[derive(Debug, Clone)]
pub struct DrawList {
    clear_color: Color,
    primitives: Vec<Primitive>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            clear_color: Color::RAY_WHITE,
            primitives: Vec::new(),
        }
    }
}

impl DrawList {
    /// Create an empty draw list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all primitives, keeping the allocation.
    pub fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.primitives.clear();
    }

    pub const fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn line(&mut self, from: Vec3, to: Vec3, color: Color) {
        self.push(Primitive::Line { from, to, color });
    }

    pub fn cube(&mut self, center: Vec3, size: f32, color: Color) {
        self.push(Primitive::Cube {
            center,
            size: Vec3::splat(size),
            color,
        });
    }

    pub fn cube_wires(&mut self, center: Vec3, size: f32, color: Color) {
        self.push(Primitive::CubeWires {
            center,
            size: Vec3::splat(size),
            color,
        });
    }

    pub fn plane(&mut self, center: Vec3, size: Vec2, color: Color) {
        self.push(Primitive::Plane {
            center,
            size,
            color,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, position: Vec2, size: f32, color: Color) {
        self.push(Primitive::Text {
            text: text.into(),
            position,
            size,
            color,
        });
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of world-space and screen-space primitives.
    pub fn counts(&self) -> (usize, usize) {
        let world = self.primitives.iter().filter(|p| p.is_world()).count();
        (world, self.primitives.len() - world)
    }
}

impl Extend<Primitive> for DrawList {
    fn extend<T: IntoIterator<Item = Primitive>>(&mut self, iter: T) {
        self.primitives.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_in_order() {
        let mut list = DrawList::new();
        list.cube(Vec3::ZERO, 2.0, Color::RED);
        list.text("hello", Vec2::new(20.0, 20.0), 20.0, Color::DARK_GRAY);
        list.line(Vec3::ZERO, Vec3::X, Color::RED);

        assert_eq!(list.len(), 3);
        assert_eq!(list.counts(), (2, 1));
        assert!(matches!(list.primitives()[1], Primitive::Text { ref text, .. } if text == "hello"));
    }

    #[test]
    fn clear_resets_primitives() {
        let mut list = DrawList::new();
        list.cube_wires(Vec3::ONE, 2.2, Color::BLACK);
        list.clear(Color::BLACK);

        assert!(list.is_empty());
        assert_eq!(list.clear_color(), Color::BLACK);
    }

    #[test]
    fn color_to_array() {
        assert_eq!(Color::BLACK.to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::rgb(255, 0, 0).to_array()[0], 1.0);
    }
}
