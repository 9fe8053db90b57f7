//! Directional movement for the Unbound prototype.
//!
//! [`DirectionalController`] turns the keys held in a frame into an 8-way
//! [`Direction`](unbound_input::Direction), moves a caller-owned position at
//! constant speed (diagonals normalized by `1/sqrt(2)`), and optionally
//! clamps it so an occupant stays fully inside the viewport.
//!
//! ```ignore
//! use unbound_control::DirectionalController;
//!
//! let mut controller = DirectionalController::new(240.0);
//! let mut pos = Vec2::new(600.0, 380.0);
//!
//! // once per frame
//! controller.update(dt, &mut pos, &input);
//! let facing = controller.direction();
//! ```

mod config;
mod controller;

pub use config::{MovementConfig, DEFAULT_SPEED};
pub use controller::{integrate, DirectionalController};
