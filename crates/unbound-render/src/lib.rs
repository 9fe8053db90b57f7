//! Camera and scene description for the Unbound prototype.
//!
//! Nothing here talks to a GPU. The frame loop fills a [`DrawList`] and a
//! presenter backend turns it into pixels.
//!
//! # Core Types
//!
//! - [`Camera`]: Perspective camera with view/projection matrices
//! - [`FollowCamera`]: Third-person camera trailing one target
//! - [`DrawList`]: Ordered primitives for one frame
//! - [`world_grid_window`] / [`centered_grid`]: Ground-plane reference grids

pub mod camera;
pub mod draw;
pub mod grid;

pub use camera::{Camera, CameraUniforms, FollowCamera, FOLLOW_DISTANCE, FOLLOW_HEIGHT};
pub use draw::{Color, DrawList, Primitive};
pub use grid::{centered_grid, world_grid_window};
pub use unbound_core::ground_position;
