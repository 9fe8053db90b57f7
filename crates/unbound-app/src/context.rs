//! Application context.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

/// Application context shared across all app methods.
pub struct AppContext {
    /// The window handle.
    pub window: Arc<Window>,
    /// Total frames rendered.
    pub frame_count: u64,
    /// Time of last frame (for delta time calculation).
    pub(crate) last_frame_time: Instant,
    width: u32,
    height: u32,
}

impl AppContext {
    /// Create a new application context for `window`.
    pub(crate) fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();
        Self {
            window,
            frame_count: 0,
            last_frame_time: Instant::now(),
            width: size.width,
            height: size.height,
        }
    }

    /// Current drawable width in pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Current drawable height in pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Width over height, or `1.0` while minimized.
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    pub(crate) fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
