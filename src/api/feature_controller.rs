use tracing::debug;

use crate::error::GanttResult;
use crate::render::Renderer;

use super::{FeatureToggles, GanttChart};

impl<R: Renderer> GanttChart<R> {
    #[must_use]
    pub fn features(&self) -> FeatureToggles {
        self.core.behavior.features
    }

    #[must_use]
    pub fn autoresize_enabled(&self) -> bool {
        self.core.behavior.features.autoresize
    }

    /// Enabling autoresize immediately adopts the last reported container size.
    pub fn set_autoresize_enabled(&mut self, enabled: bool) -> GanttResult<&mut Self> {
        self.core.behavior.features.autoresize = enabled;
        debug!(enabled, "autoresize toggled");
        if enabled && self.core.model.container.is_some() {
            return self.resize();
        }
        Ok(self)
    }

    #[must_use]
    pub fn drag_enabled(&self) -> bool {
        self.core.behavior.features.drag
    }

    pub fn set_drag_enabled(&mut self, enabled: bool) -> GanttResult<&mut Self> {
        self.core.behavior.features.drag = enabled;
        self.redraw()
    }

    #[must_use]
    pub fn item_resize_enabled(&self) -> bool {
        self.core.behavior.features.item_resize
    }

    pub fn set_item_resize_enabled(&mut self, enabled: bool) -> GanttResult<&mut Self> {
        self.core.behavior.features.item_resize = enabled;
        self.redraw()
    }

    #[must_use]
    pub fn tooltip_enabled(&self) -> bool {
        self.core.behavior.features.tooltip
    }

    pub fn set_tooltip_enabled(&mut self, enabled: bool) -> GanttResult<&mut Self> {
        self.core.behavior.features.tooltip = enabled;
        self.redraw()
    }

    #[must_use]
    pub fn zoom_enabled(&self) -> bool {
        self.core.behavior.features.zoom
    }

    /// Takes effect on the next wheel or background drag; no redraw.
    pub fn set_zoom_enabled(&mut self, enabled: bool) -> &mut Self {
        self.core.behavior.features.zoom = enabled;
        if !enabled {
            self.core.interaction.end_pan();
        }
        self
    }

    #[must_use]
    pub fn x_grid_enabled(&self) -> bool {
        self.core.behavior.features.x_grid
    }

    pub fn set_x_grid_enabled(&mut self, enabled: bool) -> GanttResult<&mut Self> {
        self.core.behavior.features.x_grid = enabled;
        self.redraw()
    }

    #[must_use]
    pub fn y_grid_enabled(&self) -> bool {
        self.core.behavior.features.y_grid
    }

    pub fn set_y_grid_enabled(&mut self, enabled: bool) -> GanttResult<&mut Self> {
        self.core.behavior.features.y_grid = enabled;
        self.redraw()
    }

    #[must_use]
    pub fn lane_labels_enabled(&self) -> bool {
        self.core.behavior.features.lane_labels
    }

    pub fn set_lane_labels_enabled(&mut self, enabled: bool) -> GanttResult<&mut Self> {
        self.core.behavior.features.lane_labels = enabled;
        self.redraw()
    }
}
