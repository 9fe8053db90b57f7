//! Test harness for the Unbound prototype.
//!
//! Drives the full per-frame pipeline (keyboard state, direction
//! resolution, movement, follow camera) from scripted input, without a
//! window.

pub mod harness;

pub use harness::{Frame, FrameHarness, FrameRecord};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error("Script error: {0}")]
    Script(String),
}

pub type Result<T> = std::result::Result<T, TestError>;
