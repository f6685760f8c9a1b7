use crate::core::ItemId;
use crate::error::GanttResult;
use crate::render::{Renderer, TooltipState};

use super::GanttChart;

impl<R: Renderer> GanttChart<R> {
    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.core.runtime.tooltip
    }

    /// Shows `id`'s tooltip at chart-space `(x, y)`. Dynamic tooltip text is
    /// evaluated here. Items without a tooltip hide the panel instead.
    pub(super) fn show_item_tooltip(&mut self, id: &ItemId, x: f64, y: f64) -> GanttResult<()> {
        if !self.core.behavior.features.tooltip {
            return Ok(());
        }
        let Some(text) = self.core.model.item(id).and_then(|item| item.tooltip_text()) else {
            return self.hide_tooltip();
        };
        self.core.runtime.tooltip = TooltipState {
            visible: true,
            text,
            x,
            y,
        };
        self.renderer.update_tooltip(&self.core.runtime.tooltip)
    }

    pub(super) fn hide_tooltip(&mut self) -> GanttResult<()> {
        let tooltip = &mut self.core.runtime.tooltip;
        if !tooltip.visible {
            return Ok(());
        }
        tooltip.visible = false;
        self.renderer.update_tooltip(&self.core.runtime.tooltip)
    }
}
