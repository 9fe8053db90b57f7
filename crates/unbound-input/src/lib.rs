//! Keyboard input and 8-way direction resolution for the Unbound prototype.
//!
//! # Core Types
//!
//! - [`InputManager`]: Feeds window events into keyboard state
//! - [`KeyboardState`]: Tracks held keys and single-frame press edges
//! - [`KeyBindings`]: Maps physical keys onto logical [`DirectionKeys`]
//! - [`DirectionalInput`]: Resolves the held keys into a [`Direction`]
//!
//! # Resolution
//!
//! Each frame the logical keys are sampled from the bindings. Opposing axis
//! keys cancel; a held diagonal override key (`Q`, `E`, `Z`, `C` by default)
//! wins outright, checked in north-west, north-east, south-west, south-east
//! order.
//!
//! ```ignore
//! use unbound_input::{Direction, DirectionalInput, KeyCode};
//!
//! let mut input = DirectionalInput::new();
//! assert_eq!(input.update(&[KeyCode::KeyW, KeyCode::KeyD]), Direction::NorthEast);
//! assert_eq!(input.update(&[KeyCode::KeyA, KeyCode::KeyD]), Direction::None);
//! assert_eq!(input.update(&[KeyCode::KeyS, KeyCode::KeyQ]), Direction::NorthWest);
//! ```

mod bindings;
mod direction;
mod directional;
mod input;
mod keyboard;
mod keys;

pub use bindings::{KeyBindings, KeyBindingsBuilder};
pub use direction::Direction;
pub use directional::DirectionalInput;
pub use input::InputManager;
pub use keyboard::{KeySource, KeyboardState};
pub use keys::DirectionKeys;

// Re-export winit types commonly used with input
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
