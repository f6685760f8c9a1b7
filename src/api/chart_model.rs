use crate::core::{
    Item, ItemId, LaneScale, Margins, SublanePacking, TimeBounds, TimeScale, Viewport,
    derived_lane_count, pack_sublanes,
};
use crate::error::GanttResult;

/// Core chart domain state: the item collection plus everything derived from
/// it (lane labels, sublane packing, scales, chart size).
#[derive(Debug)]
pub(super) struct GanttModel {
    pub(super) items: Vec<Item>,
    pub(super) lane_labels: Vec<String>,
    pub(super) viewport: Viewport,
    pub(super) margins: Margins,
    pub(super) row_height_px: f64,
    pub(super) time_bounds: TimeBounds,
    pub(super) time_scale: TimeScale,
    pub(super) lane_scale: LaneScale,
    /// Sub-row count used for vertical offsets; `packing.max_depth` unless
    /// overridden by the host.
    pub(super) sublanes: usize,
    pub(super) packing: SublanePacking,
    /// Last size reported by the host container.
    pub(super) container: Option<Viewport>,
}

pub(super) struct GanttModelBootstrap {
    pub(super) items: Vec<Item>,
    pub(super) lane_labels: Vec<String>,
    pub(super) viewport: Viewport,
    pub(super) margins: Margins,
    pub(super) row_height_px: f64,
    pub(super) time_bounds: TimeBounds,
}

impl GanttModel {
    pub(super) fn new(bootstrap: GanttModelBootstrap) -> GanttResult<Self> {
        let plot_width = bootstrap.margins.plot_width(bootstrap.viewport);
        let plot_height = bootstrap.margins.plot_height(bootstrap.viewport);
        let time_scale = TimeScale::fit(&bootstrap.items, bootstrap.time_bounds, plot_width)?;
        let lane_scale = LaneScale::new(bootstrap.lane_labels.len(), plot_height)?;
        Ok(Self {
            items: bootstrap.items,
            lane_labels: bootstrap.lane_labels,
            viewport: bootstrap.viewport,
            margins: bootstrap.margins,
            row_height_px: bootstrap.row_height_px,
            time_bounds: bootstrap.time_bounds,
            time_scale,
            lane_scale,
            sublanes: 0,
            packing: SublanePacking::default(),
            container: None,
        })
    }

    #[must_use]
    pub(super) fn lane_count(&self) -> usize {
        self.lane_labels.len()
    }

    #[must_use]
    pub(super) fn item_index(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    #[must_use]
    pub(super) fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub(super) fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    /// Resizes the label list to the lane count derived from the items.
    ///
    /// With `keep_when_empty` the supplied labels stand when no item carries a
    /// lane index, so a label-only chart still shows its lanes.
    pub(super) fn sync_lane_labels(&mut self, keep_when_empty: bool) {
        let derived = derived_lane_count(&self.items);
        if derived == 0 && keep_when_empty {
            return;
        }
        self.lane_labels.resize(derived, String::new());
    }

    /// Recomputes sublane indices and, when any item exists, the content
    /// height `max_depth × row × lanes + vertical margins`.
    ///
    /// An empty collection keeps the current height rather than collapsing
    /// the chart to its vertical margins; autoresize then falls back to the
    /// container height.
    pub(super) fn repack(&mut self) {
        let lane_count = self.lane_count();
        self.packing = pack_sublanes(&mut self.items, lane_count);
        self.sublanes = self.packing.max_depth;
        if let Some(height) = self.content_height() {
            self.viewport.height = height;
        }
    }

    #[must_use]
    pub(super) fn content_height(&self) -> Option<u32> {
        if self.packing.max_depth == 0 {
            return None;
        }
        let plot = self.packing.max_depth as f64 * self.row_height_px * self.lane_count() as f64;
        let plot = plot.ceil().clamp(0.0, f64::from(u32::MAX));
        Some((plot as u32).saturating_add(self.margins.vertical()))
    }

    #[must_use]
    pub(super) fn plot_size(&self) -> (f64, f64) {
        (
            self.margins.plot_width(self.viewport),
            self.margins.plot_height(self.viewport),
        )
    }

    /// Pushes the current size and lane count into both scales' ranges.
    pub(super) fn apply_layout(&mut self) -> GanttResult<()> {
        let (plot_width, plot_height) = self.plot_size();
        self.time_scale.set_width_px(plot_width)?;
        self.lane_scale.set_lane_count(self.lane_count())?;
        self.lane_scale.set_height_px(plot_height)
    }

    /// Recomputes the time domain from the bounds and the current items.
    pub(super) fn refit_time_domain(&mut self) -> GanttResult<()> {
        let (start, end) = self.time_bounds.resolve(&self.items);
        self.time_scale.set_domain(start, end)
    }

    #[must_use]
    pub(super) fn plot_origin(&self) -> (f64, f64) {
        (f64::from(self.margins.left), f64::from(self.margins.top))
    }

    /// Converts chart-space coordinates into plot-local ones.
    #[must_use]
    pub(super) fn to_plot(&self, x: f64, y: f64) -> (f64, f64) {
        let (origin_x, origin_y) = self.plot_origin();
        (x - origin_x, y - origin_y)
    }
}
