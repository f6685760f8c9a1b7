use tracing::{debug, trace};

use crate::core::ItemId;
use crate::error::{GanttError, GanttResult};
use crate::interaction::{
    ActiveGesture, CursorStyle, GestureSnapshot, InteractionMode, classify_drag,
    cursor_for_pointer,
};
use crate::render::Renderer;

use super::{DragEventKind, GanttChart};

/// What a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Item(ItemId),
    Background,
}

fn validate_pointer(x: f64, y: f64) -> GanttResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(GanttError::InvalidInput(format!(
            "pointer position must be finite, got ({x}, {y})"
        )));
    }
    Ok(())
}

impl<R: Renderer> GanttChart<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.core.interaction.mode()
    }

    #[must_use]
    pub fn active_gesture(&self) -> Option<&ActiveGesture> {
        self.core.interaction.gesture()
    }

    #[must_use]
    pub fn cursor_style(&self) -> CursorStyle {
        self.core.interaction.cursor()
    }

    #[must_use]
    pub fn hovered_item(&self) -> Option<&ItemId> {
        self.core.interaction.hovered()
    }

    /// Pointer pressed at chart-space `(x, y)`.
    ///
    /// Over an item this classifies and starts a gesture (when drag or resize
    /// allows one) and notifies `StartDrag` observers. Over the background it
    /// hides the tooltip and, with zoom enabled, starts a time-axis pan.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> GanttResult<PointerTarget> {
        validate_pointer(x, y)?;
        let (plot_x, plot_y) = self.core.model.to_plot(x, y);
        let hit = self
            .core
            .scene
            .hit_test(plot_x, plot_y)
            .map(|visual| (visual.id.clone(), visual.rect));

        let Some((id, rect)) = hit else {
            if self.core.behavior.features.tooltip {
                self.hide_tooltip()?;
            }
            if self.core.behavior.features.zoom {
                self.core.interaction.begin_pan(plot_x, plot_y);
            }
            return Ok(PointerTarget::Background);
        };

        let behavior = self.core.behavior;
        let Some(mode) = classify_drag(
            plot_x,
            rect,
            behavior.drag_edge_margin_px,
            behavior.drag_permissions(),
        ) else {
            return Ok(PointerTarget::Item(id));
        };
        let Some(item) = self.core.model.item(&id) else {
            return Ok(PointerTarget::Item(id));
        };

        let gesture = ActiveGesture::new(
            id.clone(),
            mode,
            GestureSnapshot {
                old_start: item.start,
                old_end: item.end,
            },
            (plot_x, plot_y),
        );
        debug!(item = %id, ?mode, "item gesture started");
        self.core.interaction.begin_gesture(gesture.clone());
        self.emit_drag_event(DragEventKind::StartDrag, &gesture);
        Ok(PointerTarget::Item(id))
    }

    /// Pointer moved to chart-space `(x, y)`: advances the active gesture or
    /// pan, or updates hover state otherwise.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> GanttResult<()> {
        validate_pointer(x, y)?;
        let (plot_x, plot_y) = self.core.model.to_plot(x, y);

        if let Some(gesture) = self.core.interaction.gesture_mut() {
            let delta = gesture.advance(plot_x, plot_y);
            let gesture = gesture.clone();
            return self.drag_gesture_by(&gesture, delta, (x, y));
        }

        if let Some(delta_x) = self.core.interaction.advance_pan(plot_x, plot_y) {
            self.pan_time(delta_x)?;
            return Ok(());
        }

        self.update_hover(plot_x, plot_y, (x, y))
    }

    /// Pointer released: commits the active gesture or ends a pan.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> GanttResult<()> {
        validate_pointer(x, y)?;
        if let Some(gesture) = self.core.interaction.take_gesture() {
            return self.commit_gesture(&gesture);
        }
        if self.core.interaction.end_pan() {
            trace!("time axis pan ended");
        }
        Ok(())
    }

    /// Pointer left the chart. Active gestures keep running until
    /// `pointer_up`; hover state and the tooltip are cleared.
    pub fn pointer_leave(&mut self) -> GanttResult<()> {
        if self.core.interaction.gesture().is_some() {
            return Ok(());
        }
        self.core.interaction.set_hovered(None);
        if self.core.interaction.set_cursor(CursorStyle::Default) {
            self.renderer.set_cursor(CursorStyle::Default)?;
        }
        self.hide_tooltip()
    }

    fn update_hover(&mut self, plot_x: f64, plot_y: f64, pointer: (f64, f64)) -> GanttResult<()> {
        let behavior = self.core.behavior;
        let hit = self
            .core
            .scene
            .hit_test(plot_x, plot_y)
            .map(|visual| (visual.id.clone(), visual.rect));

        let cursor = hit.as_ref().map_or(CursorStyle::Default, |(_, rect)| {
            cursor_for_pointer(
                plot_x,
                *rect,
                behavior.drag_edge_margin_px,
                behavior.drag_permissions(),
            )
        });
        if self.core.interaction.set_cursor(cursor) {
            self.renderer.set_cursor(cursor)?;
        }

        let hovered = hit.map(|(id, _)| id);
        if !self.core.interaction.set_hovered(hovered.clone()) {
            return Ok(());
        }
        match hovered {
            Some(id) => self.show_item_tooltip(&id, pointer.0, pointer.1),
            None => self.hide_tooltip(),
        }
    }
}
