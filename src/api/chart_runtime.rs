use serde::{Deserialize, Serialize};

use crate::render::TooltipState;

use super::drag_events::DragObservers;

/// Pass counters, useful for asserting how much work an operation triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CycleStats {
    /// Sublane packing passes.
    pub pack_passes: u64,
    /// Full render cycles delivered to the renderer.
    pub render_passes: u64,
    /// Single-visual updates pushed while dragging.
    pub live_updates: u64,
}

/// Runtime orchestration state grouped separately from model/behavior.
#[derive(Debug, Default)]
pub(super) struct ChartRuntimeState {
    pub(super) observers: DragObservers,
    pub(super) tooltip: TooltipState,
    pub(super) stats: CycleStats,
}
