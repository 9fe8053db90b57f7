//! Core types and math for the Unbound prototype.
//!
//! This crate provides the foundational types shared by the other crates:
//! - Screen/world conversions for the player position
//! - Clamp bounds that keep an occupant inside a viewport
//! - The engine-wide error type

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{ground_position, ClampBounds};
