//! Application runner and event loop.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unbound_render::{Color, DrawList};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::app::GameApp;
use crate::context::AppContext;
use crate::frame::FrameContext;
use crate::present::{Presenter, TracePresenter};

/// Application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial window width.
    pub width: u32,
    /// Initial window height.
    pub height: u32,
    /// Target frames per second (None for unlimited).
    pub target_fps: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Unbound".to_string(),
            width: 1280,
            height: 720,
            target_fps: Some(60),
        }
    }
}

impl AppConfig {
    /// Create a new config with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window dimensions.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the target FPS.
    #[must_use]
    pub const fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = Some(fps);
        self
    }

    /// Run without frame pacing.
    #[must_use]
    pub const fn unlimited_fps(mut self) -> Self {
        self.target_fps = None;
        self
    }

    /// Frame budget implied by the target FPS.
    pub fn target_frame_time(&self) -> Option<Duration> {
        self.target_fps
            .filter(|fps| *fps > 0)
            .map(|fps| Duration::from_nanos(1_000_000_000 / u64::from(fps)))
    }
}

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`, falling back to `info`. Calling it again is a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

/// Run a `GameApp` with the given configuration and the trace presenter.
///
/// This function initializes logging, creates the window, and runs the
/// event loop until the window closes or the app asks to exit.
pub fn run_app<A: GameApp + 'static>(config: AppConfig) -> anyhow::Result<()> {
    run_app_with::<A, _>(config, TracePresenter)
}

/// Run a `GameApp` with a custom presenter backend.
pub fn run_app_with<A, P>(config: AppConfig, presenter: P) -> anyhow::Result<()>
where
    A: GameApp + 'static,
    P: Presenter,
{
    init_logging();

    info!("{} starting...", config.title);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = AppRunner::<A, P> {
        config,
        presenter,
        state: None,
        failure: None,
    };

    if let Err(e) = event_loop.run_app(&mut runner) {
        error!("Event loop error: {e}");
    }

    runner.failure.map_or(Ok(()), Err)
}

/// Running FPS statistics.
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    min_fps: f64,
    max_fps: f64,
    fps_sum: f64,
    samples: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            min_fps: f64::MAX,
            max_fps: 0.0,
            fps_sum: 0.0,
            samples: 0,
        }
    }
}

impl FrameStats {
    /// Record one frame of `dt` seconds. Returns the instantaneous FPS, or
    /// `0.0` for a zero-length frame (which is not recorded).
    pub fn record(&mut self, dt: f32) -> f64 {
        if dt <= 0.0 {
            return 0.0;
        }
        let fps = 1.0 / f64::from(dt);
        self.min_fps = self.min_fps.min(fps);
        self.max_fps = self.max_fps.max(fps);
        self.fps_sum += fps;
        self.samples += 1;
        fps
    }

    /// Lowest, highest and mean FPS, if any frame was recorded.
    #[allow(clippy::cast_precision_loss)]
    pub fn summary(&self) -> Option<(f64, f64, f64)> {
        (self.samples > 0).then(|| {
            (
                self.min_fps,
                self.max_fps,
                self.fps_sum / self.samples as f64,
            )
        })
    }
}

/// Internal application runner that implements winit's `ApplicationHandler`.
struct AppRunner<A: GameApp, P: Presenter> {
    config: AppConfig,
    presenter: P,
    state: Option<AppState<A>>,
    /// First fatal error, returned from `run_app` after the loop exits.
    failure: Option<anyhow::Error>,
}

/// Internal application state.
struct AppState<A: GameApp> {
    ctx: AppContext,
    app: A,
    target_frame_time: Option<Duration>,
    stats: FrameStats,
    /// Draw list reused across frames.
    draw: DrawList,
}

impl<A: GameApp + 'static, P: Presenter> ApplicationHandler for AppRunner<A, P> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        info!("Creating application state...");

        match self.create_state(event_loop) {
            Ok(state) => {
                self.state = Some(state);
                info!("Application ready!");
            }
            Err(e) => {
                error!("Failed to initialize application: {e}");
                self.failure = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Let the app handle the event first
        if let Some(state) = &mut self.state {
            if state.app.on_event(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested");
                self.shutdown(event_loop);
            }
            WindowEvent::RedrawRequested => {
                let Some(state) = &mut self.state else {
                    return;
                };
                if let Err(e) = state.render_frame(&mut self.presenter) {
                    error!("Render error: {e}");
                }
                if state.app.should_exit() {
                    info!("Exit requested by application");
                    self.shutdown(event_loop);
                } else {
                    state.ctx.window.request_redraw();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    if let Err(e) = state.handle_resize(size.width, size.height) {
                        error!("Resize error: {e}");
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.ctx.window.request_redraw();
        }
    }
}

impl<A: GameApp + 'static, P: Presenter> AppRunner<A, P> {
    fn create_state(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<AppState<A>> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let mut ctx = AppContext::new(window);
        info!("Window: {}x{}", ctx.width(), ctx.height());

        let app = A::init(&mut ctx)?;

        Ok(AppState {
            ctx,
            app,
            target_frame_time: self.config.target_frame_time(),
            stats: FrameStats::default(),
            draw: DrawList::new(),
        })
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(mut state) = self.state.take() {
            state.cleanup();
        }
        event_loop.exit();
    }
}

impl<A: GameApp> AppState<A> {
    fn render_frame<P: Presenter>(&mut self, presenter: &mut P) -> anyhow::Result<()> {
        let frame_start = Instant::now();

        // Calculate delta time
        let dt = frame_start
            .duration_since(self.ctx.last_frame_time)
            .as_secs_f32();
        self.ctx.last_frame_time = frame_start;
        self.stats.record(dt);

        self.app.update(&self.ctx, dt);

        let mut draw = std::mem::take(&mut self.draw);
        draw.clear(Color::RAY_WHITE);
        let mut frame = FrameContext::new(draw, dt, self.ctx.frame_count);

        let result = self
            .app
            .render(&self.ctx, &mut frame)
            .and_then(|()| presenter.present(&self.ctx, &frame.draw));
        self.draw = frame.draw;
        self.ctx.frame_count += 1;

        // Frame pacing
        if let Some(target) = self.target_frame_time {
            let elapsed = frame_start.elapsed();
            if elapsed < target {
                thread::sleep(target - elapsed);
            }
        }

        result
    }

    fn handle_resize(&mut self, width: u32, height: u32) -> anyhow::Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.ctx.set_size(width, height);
        self.app.on_resize(&mut self.ctx, width, height)?;

        info!("Resized to {}x{}", width, height);
        Ok(())
    }

    fn cleanup(&mut self) {
        if let Some((min, max, avg)) = self.stats.summary() {
            info!("FPS Statistics:");
            info!("  Min: {:.1}", min);
            info!("  Max: {:.1}", max);
            info!("  Avg: {:.1}", avg);
            info!("  Total frames: {}", self.ctx.frame_count);
        }

        self.app.cleanup(&mut self.ctx);
        info!("Cleanup complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = AppConfig::new("demo").with_size(1240, 780).with_target_fps(30);
        assert_eq!(config.title, "demo");
        assert_eq!((config.width, config.height), (1240, 780));
        assert_eq!(config.target_frame_time(), Some(Duration::from_nanos(33_333_333)));

        let config = config.unlimited_fps();
        assert_eq!(config.target_frame_time(), None);
    }

    #[test]
    fn zero_fps_means_unpaced() {
        let config = AppConfig::default().with_target_fps(0);
        assert_eq!(config.target_frame_time(), None);
    }

    #[test]
    fn frame_stats() {
        let mut stats = FrameStats::default();
        assert!(stats.summary().is_none());

        assert!((stats.record(0.5) - 2.0).abs() < 1e-9);
        stats.record(0.25);
        assert_eq!(stats.record(0.0), 0.0);

        let (min, max, avg) = stats.summary().unwrap();
        assert!((min - 2.0).abs() < 1e-9);
        assert!((max - 4.0).abs() < 1e-9);
        assert!((avg - 3.0).abs() < 1e-9);
    }
}
