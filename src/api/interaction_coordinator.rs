use tracing::{debug, trace, warn};

use crate::error::GanttResult;
use crate::interaction::{ActiveGesture, DragMode, apply_drag_delta};
use crate::render::Renderer;

use super::render_coordinator::RenderCoordinator;
use super::{DragEventKind, GanttChart};

impl<R: Renderer> GanttChart<R> {
    fn gesture_allowed(&self, mode: DragMode) -> bool {
        let features = self.core.behavior.features;
        match mode {
            DragMode::Move => features.drag,
            DragMode::ResizeLeft | DragMode::ResizeRight => features.item_resize,
        }
    }

    /// Applies one pointer delta to the dragged visual and mirrors it into
    /// the item's times. Only the dragged visual is pushed to the renderer.
    pub(super) fn drag_gesture_by(
        &mut self,
        gesture: &ActiveGesture,
        (delta_x, delta_y): (f64, f64),
        pointer: (f64, f64),
    ) -> GanttResult<()> {
        if self.gesture_allowed(gesture.mode) {
            let margin = self.core.behavior.drag_edge_margin_px;
            let moved = match self.core.scene.get_mut(&gesture.item_id) {
                Some(visual) => apply_drag_delta(gesture.mode, visual, delta_x, delta_y, margin)
                    .then(|| visual.clone()),
                None => None,
            };

            match moved {
                Some(visual) => {
                    let time_scale = self.core.model.time_scale;
                    if let Some(item) = self.core.model.item_mut(&gesture.item_id) {
                        let start = time_scale.pixel_to_time(visual.rect.x);
                        let end = time_scale.pixel_to_time(visual.rect.right());
                        match gesture.mode {
                            DragMode::Move => {
                                item.start = start;
                                item.end = end;
                            }
                            DragMode::ResizeLeft => item.start = start,
                            DragMode::ResizeRight => item.end = end,
                        }
                    }
                    self.renderer.update_item(&visual)?;
                    self.core.runtime.stats.live_updates += 1;
                    self.show_item_tooltip(&gesture.item_id, pointer.0, pointer.1)?;
                }
                None => trace!(item = %gesture.item_id, mode = ?gesture.mode, "drag delta rejected"),
            }
        }

        self.emit_drag_event(DragEventKind::MoveDrag, gesture);
        Ok(())
    }

    /// Ends a gesture: snaps the visual to the lane under its top edge,
    /// writes lane and times back to the item, then re-packs and re-renders
    /// once before notifying `EndDrag` observers.
    pub(super) fn commit_gesture(&mut self, gesture: &ActiveGesture) -> GanttResult<()> {
        let lane_scale = self.core.model.lane_scale;
        let time_scale = self.core.model.time_scale;
        let Some(rect) = self.core.scene.get(&gesture.item_id).map(|visual| visual.rect) else {
            warn!(item = %gesture.item_id, "gesture ended without a visual");
            return Ok(());
        };

        let lane = lane_scale.lane_at_pixel(rect.y);
        if let Some(item) = self.core.model.item_mut(&gesture.item_id) {
            item.lane = lane;
            if matches!(gesture.mode, DragMode::Move | DragMode::ResizeLeft) {
                item.start = time_scale.pixel_to_time(rect.x);
            }
            if matches!(gesture.mode, DragMode::Move | DragMode::ResizeRight) {
                item.end = time_scale.pixel_to_time(rect.right());
            }
        }
        debug!(item = %gesture.item_id, lane, mode = ?gesture.mode, "item gesture committed");

        self.pack_pass();
        self.core.model.apply_layout()?;
        RenderCoordinator::render(self)?;

        let before = self.edited_fields(gesture);
        self.emit_drag_event(DragEventKind::EndDrag, gesture);
        if self.edited_fields(gesture) != before {
            trace!(item = %gesture.item_id, "end observer edited the item");
            self.pack_pass();
            self.core.model.apply_layout()?;
            RenderCoordinator::render(self)?;
        }
        Ok(())
    }

    fn edited_fields(&self, gesture: &ActiveGesture) -> Option<(usize, f64, f64)> {
        self.core
            .model
            .item(&gesture.item_id)
            .map(|item| (item.lane, item.start, item.end))
    }
}
