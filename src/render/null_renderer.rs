use crate::error::GanttResult;
use crate::interaction::CursorStyle;
use crate::render::{ItemVisual, RenderFrame, Renderer, TooltipState};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_item_count: usize,
    pub last_axis_line_count: usize,
    pub live_updates: usize,
    pub last_cursor: Option<CursorStyle>,
    pub tooltip_visible: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GanttResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_item_count = frame.items.len();
        self.last_axis_line_count = frame.axis_lines.len();
        self.tooltip_visible = frame.tooltip.visible;
        Ok(())
    }

    fn update_item(&mut self, visual: &ItemVisual) -> GanttResult<()> {
        visual.validate()?;
        self.live_updates += 1;
        Ok(())
    }

    fn update_tooltip(&mut self, tooltip: &TooltipState) -> GanttResult<()> {
        self.tooltip_visible = tooltip.visible;
        Ok(())
    }

    fn set_cursor(&mut self, cursor: CursorStyle) -> GanttResult<()> {
        self.last_cursor = Some(cursor);
        Ok(())
    }
}
