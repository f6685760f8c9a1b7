use crate::error::GanttResult;
use crate::render::Renderer;

use super::{engine_core::EngineCore, render_coordinator::RenderCoordinator};

/// Main orchestration facade consumed by host applications.
///
/// `GanttChart` owns the item collection, derives lanes, sublanes and scales
/// from it, turns pointer input into item edits, and pushes frames to the
/// renderer. Every mutating operation either completes and re-renders, or
/// rejects its input and leaves the chart untouched.
#[derive(Debug)]
pub struct GanttChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> GanttChart<R> {
    /// Runs a full render cycle. Hides the tooltip.
    pub fn redraw(&mut self) -> GanttResult<&mut Self> {
        RenderCoordinator::render(self)?;
        Ok(self)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
