//! Per-frame context for rendering.

use unbound_render::DrawList;

/// Context for the current frame being described.
pub struct FrameContext {
    /// Primitives to present this frame.
    pub draw: DrawList,
    /// Delta time since last frame in seconds.
    pub dt: f32,
    /// Current frame number.
    pub frame_number: u64,
}

impl FrameContext {
    /// Create a new frame context, reusing the allocation of `draw`.
    pub(crate) fn new(draw: DrawList, dt: f32, frame_number: u64) -> Self {
        Self {
            draw,
            dt,
            frame_number,
        }
    }
}
