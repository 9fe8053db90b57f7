//! Demo application: one player moved by 8-way input, trailed by the camera.

use glam::{IVec2, Vec2};
use tracing::{info, warn};

use unbound_app::{AppContext, FrameContext, GameApp, WindowEvent};
use unbound_control::{DirectionalController, MovementConfig};
use unbound_core::{ground_position, ClampBounds};
use unbound_input::{InputManager, KeyCode};
use unbound_render::FollowCamera;

use crate::params::{probe_sprite, DemoParams};
use crate::scene;

/// Demo application state.
pub struct Demo {
    controller: DirectionalController,
    input: InputManager,
    camera: FollowCamera,
    /// Player position in screen pixels (top-left of the occupant).
    position: Vec2,
    /// Occupant size used for clamping and centring.
    occupant: IVec2,
    clamp: bool,
    should_exit: bool,
}

/// Occupant size from an explicit size, a sprite, or zero.
fn resolve_occupant(params: &DemoParams) -> IVec2 {
    if let Some(size) = params.occupant {
        return size;
    }
    let Some(path) = &params.sprite else {
        return IVec2::ZERO;
    };
    match probe_sprite(path) {
        Ok(size) => {
            info!("Sprite {}: {}x{}", path.display(), size.x, size.y);
            size
        }
        Err(e) => {
            warn!(
                "Failed to read sprite {}: {e}; using a zero-size occupant",
                path.display()
            );
            IVec2::ZERO
        }
    }
}

fn viewport(ctx: &AppContext) -> IVec2 {
    IVec2::new(
        i32::try_from(ctx.width()).unwrap_or(i32::MAX),
        i32::try_from(ctx.height()).unwrap_or(i32::MAX),
    )
}

impl Demo {
    fn bounds(&self, viewport: IVec2) -> Option<ClampBounds> {
        self.clamp.then(|| ClampBounds {
            viewport,
            occupant: self.occupant,
        })
    }
}

impl GameApp for Demo {
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self> {
        let params = DemoParams::from_args()?;
        let occupant = resolve_occupant(&params);
        let viewport = viewport(ctx);

        // Start centred on screen
        let position = (viewport.as_vec2() - occupant.as_vec2()) / 2.0;

        let mut demo = Self {
            controller: DirectionalController::with_config(MovementConfig::new(params.speed)),
            input: InputManager::new(),
            camera: FollowCamera::new(ground_position(position)),
            position,
            occupant,
            clamp: params.clamp,
            should_exit: false,
        };
        demo.controller.set_clamp(demo.bounds(viewport));
        demo.camera.set_aspect(ctx.aspect_ratio());

        info!(
            "Demo initialized: speed={} clamp={} occupant={}x{}",
            demo.controller.speed(),
            demo.clamp,
            occupant.x,
            occupant.y
        );
        Ok(demo)
    }

    fn update(&mut self, _ctx: &AppContext, dt: f32) {
        if self.input.is_key_just_pressed(KeyCode::Escape) {
            info!("Escape pressed, exiting");
            self.should_exit = true;
        }

        // Sample input -> resolve direction -> integrate -> follow
        self.controller.update(dt, &mut self.position, &self.input);
        self.camera.update(ground_position(self.position));

        // End input frame (must be called at end of update)
        self.input.end_frame();
    }

    fn render(&mut self, _ctx: &AppContext, frame: &mut FrameContext) -> anyhow::Result<()> {
        scene::describe(
            &mut frame.draw,
            &self.camera,
            self.position,
            ground_position(self.position),
        );
        Ok(())
    }

    fn on_resize(&mut self, ctx: &mut AppContext, _width: u32, _height: u32) -> anyhow::Result<()> {
        let bounds = self.bounds(viewport(ctx));
        self.controller.set_clamp(bounds);
        self.camera.set_aspect(ctx.aspect_ratio());
        Ok(())
    }

    fn on_event(&mut self, event: &WindowEvent) -> bool {
        self.input.process_window_event(event)
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }
}
