use tracing::{debug, trace};

use crate::core::{MarginPatch, Margins, TimeBounds, Viewport};
use crate::error::GanttResult;
use crate::render::Renderer;

use super::GanttChart;
use super::render_coordinator::RenderCoordinator;

impl<R: Renderer> GanttChart<R> {
    /// Re-runs sublane packing and adopts the packed content height.
    pub(super) fn pack_pass(&mut self) {
        let model = &mut self.core.model;
        model.repack();
        let packing = &model.packing;
        trace!(
            max_depth = packing.max_depth,
            deepest_lanes = ?packing.deepest_lanes,
            height = model.viewport.height,
            "sublane packing pass"
        );
        self.core.runtime.stats.pack_passes += 1;
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.core.model.margins
    }

    /// Updates the supplied margins atomically, then re-packs and re-renders.
    ///
    /// Any side that is negative, non-finite or out of range rejects the
    /// whole patch.
    pub fn set_margins(&mut self, patch: MarginPatch) -> GanttResult<&mut Self> {
        let margins = self.core.model.margins.patched(patch)?;
        self.core.model.margins = margins;
        self.pack_pass();
        self.core.model.apply_layout()?;
        RenderCoordinator::render(self)?;
        debug!(?margins, "margins updated");
        Ok(self)
    }

    /// Current chart size as `(width, height)` in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        let viewport = self.core.model.viewport;
        (viewport.width, viewport.height)
    }

    /// Sets an explicit chart size and turns autoresize off.
    ///
    /// A zero dimension keeps the current value. The height holds until the
    /// next packing pass.
    pub fn set_size(&mut self, width: u32, height: u32) -> GanttResult<&mut Self> {
        let current = self.core.model.viewport;
        self.core.model.viewport = Viewport::new(
            if width == 0 { current.width } else { width },
            if height == 0 { current.height } else { height },
        );
        self.core.behavior.features.autoresize = false;
        self.resize()
    }

    /// Re-applies the current size to the scales and re-renders. With
    /// autoresize on, the last container size is adopted first.
    pub fn resize(&mut self) -> GanttResult<&mut Self> {
        if self.core.behavior.features.autoresize {
            self.adopt_container_size();
        }
        self.core.model.apply_layout()?;
        RenderCoordinator::render(self)?;
        Ok(self)
    }

    /// Host notification that the containing element changed size.
    ///
    /// Ignored while autoresize is off. The container height is only used
    /// when no packed content height applies.
    pub fn container_resized(&mut self, width: u32, height: u32) -> GanttResult<&mut Self> {
        self.core.model.container = Some(Viewport::new(width, height));
        if !self.core.behavior.features.autoresize {
            trace!(width, height, "container resize ignored, autoresize off");
            return Ok(self);
        }
        self.resize()
    }

    fn adopt_container_size(&mut self) {
        let model = &mut self.core.model;
        let Some(container) = model.container else {
            return;
        };
        if container.width > 0 {
            model.viewport.width = container.width;
        }
        match model.content_height() {
            Some(height) => model.viewport.height = height,
            None if container.height > 0 => model.viewport.height = container.height,
            None => {}
        }
    }

    #[must_use]
    pub fn lanes(&self) -> &[String] {
        &self.core.model.lane_labels
    }

    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.core.model.lane_count()
    }

    /// Replaces the lane labels. When items exist the list is truncated or
    /// padded with empty labels to the item-derived lane count.
    pub fn set_lanes<I, S>(&mut self, lanes: I) -> GanttResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core.model.lane_labels = lanes.into_iter().map(Into::into).collect();
        self.core.model.sync_lane_labels(true);
        self.pack_pass();
        self.core.model.apply_layout()?;
        RenderCoordinator::render(self)?;
        Ok(self)
    }

    /// Sub-row count used for vertical offsets.
    #[must_use]
    pub fn sublanes(&self) -> usize {
        self.core.model.sublanes
    }

    /// Overrides the sub-row count until the next packing pass.
    pub fn set_sublanes(&mut self, sublanes: usize) -> GanttResult<&mut Self> {
        self.core.model.sublanes = sublanes;
        RenderCoordinator::render(self)?;
        Ok(self)
    }

    #[must_use]
    pub fn time_bounds(&self) -> TimeBounds {
        self.core.model.time_bounds
    }

    /// Sets explicit time-domain bounds (`None` derives from the items) and
    /// refits the time scale.
    pub fn set_time_bounds(&mut self, bounds: TimeBounds) -> GanttResult<&mut Self> {
        let bounds = bounds.validate()?;
        self.core.model.time_bounds = bounds;
        self.core.model.refit_time_domain()?;
        RenderCoordinator::render(self)?;
        Ok(self)
    }

    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.core.model.row_height_px
    }
}
