use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Item;
use crate::error::GanttError;
use crate::interaction::{DragMode, GestureSnapshot};
use crate::render::ItemVisual;

/// Lifecycle points of an item gesture that observers can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DragEventKind {
    StartDrag,
    MoveDrag,
    EndDrag,
}

impl DragEventKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartDrag => "startDrag",
            Self::MoveDrag => "moveDrag",
            Self::EndDrag => "endDrag",
        }
    }
}

impl fmt::Display for DragEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DragEventKind {
    type Err = GanttError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "startDrag" => Ok(Self::StartDrag),
            "moveDrag" => Ok(Self::MoveDrag),
            "endDrag" => Ok(Self::EndDrag),
            other => Err(GanttError::InvalidInput(format!(
                "unknown drag event `{other}`, expected startDrag, moveDrag or endDrag"
            ))),
        }
    }
}

/// Context handed to drag observers.
///
/// `visual` is the dragged item's current geometry. `snapshot` holds the
/// item's times from before the gesture, so an `EndDrag` observer can restore
/// them to reject the edit.
#[derive(Debug, Clone, Copy)]
pub struct DragEvent<'a> {
    pub kind: DragEventKind,
    pub mode: DragMode,
    pub visual: &'a ItemVisual,
    pub snapshot: GestureSnapshot,
}

/// Observer callback. The item is the live record and may be edited.
pub type DragCallback = Box<dyn FnMut(&DragEvent<'_>, &mut Item)>;

/// Registered observers per event kind, invoked in registration order.
#[derive(Default)]
pub(super) struct DragObservers {
    start: Vec<DragCallback>,
    moving: Vec<DragCallback>,
    end: Vec<DragCallback>,
}

impl std::fmt::Debug for DragObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragObservers")
            .field("start", &self.start.len())
            .field("moving", &self.moving.len())
            .field("end", &self.end.len())
            .finish()
    }
}

impl DragObservers {
    pub(super) fn push(&mut self, kind: DragEventKind, callback: DragCallback) {
        self.list_mut(kind).push(callback);
    }

    pub(super) fn list_mut(&mut self, kind: DragEventKind) -> &mut Vec<DragCallback> {
        match kind {
            DragEventKind::StartDrag => &mut self.start,
            DragEventKind::MoveDrag => &mut self.moving,
            DragEventKind::EndDrag => &mut self.end,
        }
    }

    #[must_use]
    pub(super) fn len(&self, kind: DragEventKind) -> usize {
        match kind {
            DragEventKind::StartDrag => self.start.len(),
            DragEventKind::MoveDrag => self.moving.len(),
            DragEventKind::EndDrag => self.end.len(),
        }
    }
}
