//! `GameApp` trait definition.

use winit::event::WindowEvent;

use crate::context::AppContext;
use crate::frame::FrameContext;

/// Trait for Unbound applications.
///
/// Implement this trait to plug game logic into the frame loop. The
/// framework handles window creation, frame timing and event dispatch;
/// the app updates its state and describes each frame in a draw list.
pub trait GameApp: Sized {
    /// Initialize the application.
    ///
    /// Called once when the application starts, after the window has been
    /// created.
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self>;

    /// Update application state.
    ///
    /// Called every frame before rendering.
    ///
    /// # Arguments
    /// * `ctx` - Application context with window access
    /// * `dt` - Delta time in seconds since last frame
    fn update(&mut self, ctx: &AppContext, dt: f32);

    /// Describe a frame.
    ///
    /// Called every frame after `update()`. Push primitives into
    /// `frame.draw`; the framework hands the list to the presenter.
    fn render(&mut self, ctx: &AppContext, frame: &mut FrameContext) -> anyhow::Result<()>;

    /// Handle window resize.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn on_resize(&mut self, ctx: &mut AppContext, width: u32, height: u32) -> anyhow::Result<()> {
        Ok(())
    }

    /// Handle window events.
    ///
    /// Called for each window event. Return `true` if the event was
    /// handled and should not be processed further.
    ///
    /// Default implementation does nothing and returns `false`.
    #[allow(unused_variables)]
    fn on_event(&mut self, event: &WindowEvent) -> bool {
        false
    }

    /// Returns `true` once the app wants the loop to stop.
    ///
    /// Checked after every frame. Default implementation never exits.
    fn should_exit(&self) -> bool {
        false
    }

    /// Cleanup before shutdown.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn cleanup(&mut self, ctx: &mut AppContext) {}
}
