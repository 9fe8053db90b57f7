//! Per-frame scene description for the demo.

use glam::{Vec2, Vec3};
use unbound_render::{centered_grid, world_grid_window, Color, DrawList, FollowCamera};

/// Half extent of the world grid window around the camera.
const GRID_HALF_EXTENT: f32 = 100.0;
/// World grid spacing.
const GRID_SPACING: f32 = 1.0;
/// Length of the axis helper lines.
const AXIS_LENGTH: f32 = 20.0;

/// Describe the world around the player and the HUD.
pub fn describe(draw: &mut DrawList, camera: &FollowCamera, screen: Vec2, world: Vec3) {
    draw.clear(Color::RAY_WHITE);

    // World-aligned grid, fixed in the world while the camera moves
    draw.extend(world_grid_window(
        camera.camera().position,
        GRID_HALF_EXTENT,
        GRID_SPACING,
    ));
    draw.cube(world, 2.0, Color::RED);
    draw.plane(Vec3::new(0.0, -1.0, 0.0), Vec2::splat(100.0), Color::LIGHT_GRAY);

    // Axis helpers: X (red), Y (green), Z (blue)
    draw.line(Vec3::ZERO, Vec3::X * AXIS_LENGTH, Color::RED);
    draw.line(Vec3::ZERO, Vec3::Y * AXIS_LENGTH, Color::GREEN);
    draw.line(Vec3::ZERO, Vec3::Z * AXIS_LENGTH, Color::BLUE);

    draw.cube_wires(world, 2.2, Color::BLACK);
    draw.extend(centered_grid(Vec3::ZERO, 10, 0.5));

    draw.text("Press ESC to quit", Vec2::new(20.0, 20.0), 20.0, Color::DARK_GRAY);
    draw.text(
        format!("2D Pos (screen): x={:.1}  y={:.1}", screen.x, screen.y),
        Vec2::new(20.0, 46.0),
        18.0,
        Color::DARK_GRAY,
    );
    draw.text(
        format!(
            "3D Pos (world):  X={:.1}  Y={:.1}  Z={:.1}",
            world.x, world.y, world.z
        ),
        Vec2::new(20.0, 68.0),
        18.0,
        Color::DARK_GRAY,
    );
}
