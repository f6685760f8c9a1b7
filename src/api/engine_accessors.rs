use crate::core::{ItemId, SublanePacking};
use crate::render::{ItemVisual, Renderer, Scene};

use super::{CycleStats, GanttChart};

impl<R: Renderer> GanttChart<R> {
    /// Plot-local x for a time in ms since the epoch.
    #[must_use]
    pub fn map_time_to_pixel(&self, time: f64) -> f64 {
        self.core.model.time_scale.time_to_pixel(time)
    }

    #[must_use]
    pub fn map_pixel_to_time(&self, pixel: f64) -> f64 {
        self.core.model.time_scale.pixel_to_time(pixel)
    }

    /// Plot-local y of a (fractional) lane position.
    #[must_use]
    pub fn map_lane_to_pixel(&self, lane: f64) -> f64 {
        self.core.model.lane_scale.lane_to_pixel(lane)
    }

    #[must_use]
    pub fn map_pixel_to_lane(&self, pixel: f64) -> f64 {
        self.core.model.lane_scale.pixel_to_lane(pixel)
    }

    /// Top-left corner of the plot area in chart coordinates.
    #[must_use]
    pub fn plot_origin(&self) -> (f64, f64) {
        self.core.model.plot_origin()
    }

    #[must_use]
    pub fn plot_size(&self) -> (f64, f64) {
        self.core.model.plot_size()
    }

    #[must_use]
    pub fn sublane_packing(&self) -> &SublanePacking {
        &self.core.model.packing
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.core.scene
    }

    #[must_use]
    pub fn item_visual(&self, id: &ItemId) -> Option<&ItemVisual> {
        self.core.scene.get(id)
    }

    #[must_use]
    pub fn cycle_stats(&self) -> CycleStats {
        self.core.runtime.stats
    }
}
