mod frame;
mod null_renderer;
mod primitives;
mod scene;

pub use frame::{ItemVisual, RenderFrame, TooltipState};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use scene::{Scene, SceneDiff};

use crate::error::GanttResult;
use crate::interaction::CursorStyle;

/// Contract implemented by the host's drawing surface.
///
/// Full render cycles deliver a materialized `RenderFrame`; during a drag the
/// engine only pushes the one visual that moved. Everything except `render`
/// defaults to a no-op so minimal backends stay small.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GanttResult<()>;

    fn update_item(&mut self, visual: &ItemVisual) -> GanttResult<()> {
        let _ = visual;
        Ok(())
    }

    fn update_tooltip(&mut self, tooltip: &TooltipState) -> GanttResult<()> {
        let _ = tooltip;
        Ok(())
    }

    fn set_cursor(&mut self, cursor: CursorStyle) -> GanttResult<()> {
        let _ = cursor;
        Ok(())
    }
}
