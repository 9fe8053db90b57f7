//! Reference grids on the `Y = 0` ground plane.

use glam::Vec3;

use crate::draw::{Color, Primitive};

/// Coordinates closer than this to zero count as a world axis.
const AXIS_EPSILON: f32 = 1e-4;

fn grid_line(from: Vec3, to: Vec3, emphasized: bool) -> Primitive {
    let color = if emphasized {
        Color::DARK_GRAY
    } else {
        Color::LIGHT_GRAY
    };
    Primitive::Line { from, to, color }
}

/// World-aligned grid lines covering `center ± half_extent` on X and Z.
///
/// Lines sit on multiples of `spacing`, so the grid stays fixed in the world
/// while the window follows `center`. Lines on world `X = 0` and `Z = 0` are
/// emphasized. Returns nothing for a non-positive or non-finite spacing.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn world_grid_window(center: Vec3, half_extent: f32, spacing: f32) -> Vec<Primitive> {
    if !(spacing.is_finite() && spacing > 0.0) || !half_extent.is_finite() {
        return Vec::new();
    }

    let first_x = ((center.x - half_extent) / spacing).floor() as i64;
    let last_x = ((center.x + half_extent) / spacing).floor() as i64;
    let first_z = ((center.z - half_extent) / spacing).floor() as i64;
    let last_z = ((center.z + half_extent) / spacing).floor() as i64;

    let (start_x, end_x) = (first_x as f32 * spacing, last_x as f32 * spacing);
    let (start_z, end_z) = (first_z as f32 * spacing, last_z as f32 * spacing);

    let along_z = (first_x..=last_x).map(|i| {
        let x = i as f32 * spacing;
        grid_line(
            Vec3::new(x, 0.0, start_z),
            Vec3::new(x, 0.0, end_z),
            x.abs() < AXIS_EPSILON,
        )
    });
    let along_x = (first_z..=last_z).map(|i| {
        let z = i as f32 * spacing;
        grid_line(
            Vec3::new(start_x, 0.0, z),
            Vec3::new(end_x, 0.0, z),
            z.abs() < AXIS_EPSILON,
        )
    });

    along_z.chain(along_x).collect()
}

/// Square grid of `slices` cells centred on `center`, with the centre lines emphasized.
#[allow(clippy::cast_precision_loss)]
pub fn centered_grid(center: Vec3, slices: u32, spacing: f32) -> Vec<Primitive> {
    let half = i64::from(slices / 2);
    let reach = half as f32 * spacing;

    (-half..=half)
        .flat_map(|i| {
            let offset = i as f32 * spacing;
            [
                grid_line(
                    Vec3::new(center.x - reach, 0.0, center.z + offset),
                    Vec3::new(center.x + reach, 0.0, center.z + offset),
                    i == 0,
                ),
                grid_line(
                    Vec3::new(center.x + offset, 0.0, center.z - reach),
                    Vec3::new(center.x + offset, 0.0, center.z + reach),
                    i == 0,
                ),
            ]
        })
        .collect()
}
