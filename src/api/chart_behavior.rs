use super::FeatureToggles;
use crate::interaction::DragPermissions;

/// Runtime behavior switches and interaction tuning, grouped separately from
/// the item model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ChartBehaviorState {
    pub(super) features: FeatureToggles,
    pub(super) time_tick_count: usize,
    pub(super) drag_edge_margin_px: f64,
    pub(super) zoom_step_ratio: f64,
    pub(super) min_time_span: f64,
}

impl ChartBehaviorState {
    #[must_use]
    pub(super) fn drag_permissions(&self) -> DragPermissions {
        DragPermissions {
            drag: self.features.drag,
            item_resize: self.features.item_resize,
        }
    }
}
