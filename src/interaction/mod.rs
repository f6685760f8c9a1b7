//! Pointer-driven item drag state machine.
//!
//! A gesture is `pointer_down → pointer_move* → pointer_up`. At most one item
//! is dragged at a time; its mode is classified once at pointer-down from the
//! pointer's distance to the item edges and never re-derived from presentation
//! state afterwards.

use serde::{Deserialize, Serialize};

use crate::core::ItemId;
use crate::render::{ItemVisual, RectPrimitive};

/// Distance from an item edge, in pixels, within which a drag resizes.
pub const DEFAULT_DRAG_EDGE_MARGIN_PX: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragMode {
    Move,
    ResizeLeft,
    ResizeRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Moving,
    ResizingLeft,
    ResizingRight,
    /// Background drag panning the time axis.
    Panning,
}

impl From<DragMode> for InteractionMode {
    fn from(mode: DragMode) -> Self {
        match mode {
            DragMode::Move => Self::Moving,
            DragMode::ResizeLeft => Self::ResizingLeft,
            DragMode::ResizeRight => Self::ResizingRight,
        }
    }
}

/// Advisory pointer style for the gesture that would start at the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorStyle {
    Default,
    Move,
    Resize,
}

/// Which item gestures are currently allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPermissions {
    pub drag: bool,
    pub item_resize: bool,
}

/// Classifies a pointer-down at plot-local `pointer_x` over `rect`.
///
/// Edge proximity wins over move; when both edges are in reach (narrow bars)
/// the nearer one is chosen, ties going to the start edge.
#[must_use]
pub fn classify_drag(
    pointer_x: f64,
    rect: RectPrimitive,
    edge_margin_px: f64,
    permissions: DragPermissions,
) -> Option<DragMode> {
    if permissions.item_resize {
        let to_start = (pointer_x - rect.x).abs();
        let to_end = (pointer_x - rect.right()).abs();
        let near_start = to_start <= edge_margin_px;
        let near_end = to_end <= edge_margin_px;
        match (near_start, near_end) {
            (true, true) if to_end < to_start => return Some(DragMode::ResizeRight),
            (true, _) => return Some(DragMode::ResizeLeft),
            (false, true) => return Some(DragMode::ResizeRight),
            (false, false) => {}
        }
    }
    permissions.drag.then_some(DragMode::Move)
}

#[must_use]
pub fn cursor_for_pointer(
    pointer_x: f64,
    rect: RectPrimitive,
    edge_margin_px: f64,
    permissions: DragPermissions,
) -> CursorStyle {
    match classify_drag(pointer_x, rect, edge_margin_px, permissions) {
        Some(DragMode::Move) => CursorStyle::Move,
        Some(DragMode::ResizeLeft | DragMode::ResizeRight) => CursorStyle::Resize,
        None => CursorStyle::Default,
    }
}

/// Item times captured when the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSnapshot {
    pub old_start: f64,
    pub old_end: f64,
}

/// The single in-flight item gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveGesture {
    pub item_id: ItemId,
    pub mode: DragMode,
    pub snapshot: GestureSnapshot,
    last_pointer: (f64, f64),
}

impl ActiveGesture {
    #[must_use]
    pub fn new(item_id: ItemId, mode: DragMode, snapshot: GestureSnapshot, pointer: (f64, f64)) -> Self {
        Self {
            item_id,
            mode,
            snapshot,
            last_pointer: pointer,
        }
    }

    /// Records the new pointer position and returns the delta since the last one.
    pub fn advance(&mut self, x: f64, y: f64) -> (f64, f64) {
        let delta = (x - self.last_pointer.0, y - self.last_pointer.1);
        self.last_pointer = (x, y);
        delta
    }
}

/// Applies one pointer delta to the dragged visual. Returns `false` when the
/// edge guard rejected the delta and nothing moved.
///
/// Resize guards keep each edge at least `edge_margin_px` away from the
/// opposite edge after the delta; deltas that grow the bar always apply.
pub fn apply_drag_delta(
    mode: DragMode,
    visual: &mut ItemVisual,
    delta_x: f64,
    delta_y: f64,
    edge_margin_px: f64,
) -> bool {
    let rect = &mut visual.rect;
    match mode {
        DragMode::Move => {
            rect.x += delta_x;
            rect.y += delta_y;
            visual.label.x += delta_x;
            visual.label.y += delta_y;
            true
        }
        DragMode::ResizeLeft => {
            let new_left = rect.x + delta_x;
            if delta_x > 0.0 && new_left > rect.right() - edge_margin_px {
                return false;
            }
            rect.x = new_left;
            rect.width -= delta_x;
            visual.recenter_label();
            true
        }
        DragMode::ResizeRight => {
            let new_right = rect.right() + delta_x;
            if delta_x < 0.0 && new_right < rect.x + edge_margin_px {
                return false;
            }
            rect.width += delta_x;
            visual.recenter_label();
            true
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    gesture: Option<ActiveGesture>,
    pan_pointer: Option<(f64, f64)>,
    hovered: Option<ItemId>,
    cursor: CursorStyle,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            gesture: None,
            pan_pointer: None,
            hovered: None,
            cursor: CursorStyle::Default,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match (&self.gesture, self.pan_pointer) {
            (Some(gesture), _) => gesture.mode.into(),
            (None, Some(_)) => InteractionMode::Panning,
            (None, None) => InteractionMode::Idle,
        }
    }

    #[must_use]
    pub fn gesture(&self) -> Option<&ActiveGesture> {
        self.gesture.as_ref()
    }

    pub fn gesture_mut(&mut self) -> Option<&mut ActiveGesture> {
        self.gesture.as_mut()
    }

    pub fn begin_gesture(&mut self, gesture: ActiveGesture) {
        self.pan_pointer = None;
        self.gesture = Some(gesture);
    }

    pub fn take_gesture(&mut self) -> Option<ActiveGesture> {
        self.gesture.take()
    }

    pub fn begin_pan(&mut self, x: f64, y: f64) {
        self.pan_pointer = Some((x, y));
    }

    /// Horizontal pointer delta since the last pan event, `None` when no pan
    /// is in progress.
    pub fn advance_pan(&mut self, x: f64, y: f64) -> Option<f64> {
        let last = self.pan_pointer.replace((x, y))?;
        Some(x - last.0)
    }

    pub fn end_pan(&mut self) -> bool {
        self.pan_pointer.take().is_some()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&ItemId> {
        self.hovered.as_ref()
    }

    /// Returns `true` when the hovered item changed.
    pub fn set_hovered(&mut self, hovered: Option<ItemId>) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }

    #[must_use]
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Returns `true` when the cursor style changed.
    pub fn set_cursor(&mut self, cursor: CursorStyle) -> bool {
        if self.cursor == cursor {
            return false;
        }
        self.cursor = cursor;
        true
    }
}
