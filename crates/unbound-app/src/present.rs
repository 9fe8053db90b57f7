//! Presenter backends that consume a frame's draw list.

use tracing::trace;
use unbound_render::DrawList;

use crate::context::AppContext;

/// Turns a finished [`DrawList`] into output.
///
/// A GPU backend implements this to rasterize the primitives; the default
/// [`TracePresenter`] only reports what would have been drawn.
pub trait Presenter {
    /// Present one frame.
    fn present(&mut self, ctx: &AppContext, draw: &DrawList) -> anyhow::Result<()>;
}

/// Presenter that logs a per-frame summary at trace level.
#[derive(Debug, Default)]
pub struct TracePresenter;

impl Presenter for TracePresenter {
    fn present(&mut self, ctx: &AppContext, draw: &DrawList) -> anyhow::Result<()> {
        let (world, overlay) = draw.counts();
        trace!(
            frame = ctx.frame_count,
            world,
            overlay,
            "presented frame"
        );
        Ok(())
    }
}
