//! Application framework for the Unbound prototype.
//!
//! This crate provides a trait-based application framework that handles
//! common boilerplate like:
//! - Logging setup
//! - Window creation and management
//! - Frame timing and pacing
//! - Event loop handling
//!
//! # Example
//!
//! ```no_run
//! use unbound_app::{GameApp, AppContext, FrameContext, AppConfig, run_app};
//!
//! struct MyApp {
//!     // Application state
//! }
//!
//! impl GameApp for MyApp {
//!     fn init(ctx: &mut AppContext) -> anyhow::Result<Self> {
//!         Ok(MyApp {})
//!     }
//!
//!     fn update(&mut self, ctx: &AppContext, dt: f32) {
//!         // Update logic
//!     }
//!
//!     fn render(&mut self, ctx: &AppContext, frame: &mut FrameContext) -> anyhow::Result<()> {
//!         // Describe the frame in frame.draw
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     run_app::<MyApp>(AppConfig::default())
//! }
//! ```

mod app;
mod context;
mod frame;
mod present;
mod runner;

pub use app::GameApp;
pub use context::AppContext;
pub use frame::FrameContext;
pub use present::{Presenter, TracePresenter};
pub use runner::{init_logging, run_app, run_app_with, AppConfig, FrameStats};

// Re-export commonly used types for convenience
pub use unbound_render::{DrawList, FollowCamera};
pub use winit::event::WindowEvent;
