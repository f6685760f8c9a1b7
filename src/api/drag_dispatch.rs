use tracing::trace;

use crate::core::Item;
use crate::error::GanttResult;
use crate::interaction::ActiveGesture;
use crate::render::Renderer;

use super::{DragEvent, DragEventKind, GanttChart};

impl<R: Renderer> GanttChart<R> {
    /// Registers `callback` for `kind`. Observers of one kind run in
    /// registration order.
    pub fn on_drag_event(
        &mut self,
        kind: DragEventKind,
        callback: impl FnMut(&DragEvent<'_>, &mut Item) + 'static,
    ) -> &mut Self {
        self.core.runtime.observers.push(kind, Box::new(callback));
        trace!(
            event = %kind,
            observers = self.core.runtime.observers.len(kind),
            "drag observer registered"
        );
        self
    }

    /// Registers an observer by event name (`startDrag`, `moveDrag`,
    /// `endDrag`).
    pub fn attach_event(
        &mut self,
        name: &str,
        callback: impl FnMut(&DragEvent<'_>, &mut Item) + 'static,
    ) -> GanttResult<&mut Self> {
        let kind = name.parse::<DragEventKind>()?;
        Ok(self.on_drag_event(kind, callback))
    }

    #[must_use]
    pub fn drag_observer_count(&self, kind: DragEventKind) -> usize {
        self.core.runtime.observers.len(kind)
    }

    /// Invokes every `kind` observer with the gesture's item and visual.
    ///
    /// Observers receive disjoint borrows of the scene and item collection,
    /// so they cannot re-enter the chart.
    pub(super) fn emit_drag_event(&mut self, kind: DragEventKind, gesture: &ActiveGesture) {
        let core = &mut self.core;
        let Some(index) = core.model.item_index(&gesture.item_id) else {
            return;
        };
        let Some(visual) = core.scene.get(&gesture.item_id) else {
            return;
        };
        let event = DragEvent {
            kind,
            mode: gesture.mode,
            visual,
            snapshot: gesture.snapshot,
        };
        let item = &mut core.model.items[index];
        for callback in core.runtime.observers.list_mut(kind) {
            callback(&event, &mut *item);
        }
    }
}
