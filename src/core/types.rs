use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};

/// Outer chart size in pixels, margins included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

/// Space reserved around the plot area for axes and lane labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20,
            right: 15,
            bottom: 20,
            left: 20,
        }
    }
}

impl Margins {
    #[must_use]
    pub fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    #[must_use]
    pub fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Plot width left after subtracting horizontal margins. May be negative
    /// when margins exceed the viewport.
    #[must_use]
    pub fn plot_width(self, viewport: Viewport) -> f64 {
        f64::from(viewport.width) - f64::from(self.horizontal())
    }

    #[must_use]
    pub fn plot_height(self, viewport: Viewport) -> f64 {
        f64::from(viewport.height) - f64::from(self.vertical())
    }

    /// Applies every field of `patch`, or none of them if any field is invalid.
    pub fn patched(self, patch: MarginPatch) -> GanttResult<Self> {
        Ok(Self {
            top: resolve_margin_field("top", patch.top, self.top)?,
            right: resolve_margin_field("right", patch.right, self.right)?,
            bottom: resolve_margin_field("bottom", patch.bottom, self.bottom)?,
            left: resolve_margin_field("left", patch.left, self.left)?,
        })
    }
}

/// Partial margin update; `None` fields keep their current value.
///
/// Values are truncated to whole pixels once validated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarginPatch {
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
}

impl MarginPatch {
    #[must_use]
    pub fn top(mut self, value: f64) -> Self {
        self.top = Some(value);
        self
    }

    #[must_use]
    pub fn right(mut self, value: f64) -> Self {
        self.right = Some(value);
        self
    }

    #[must_use]
    pub fn bottom(mut self, value: f64) -> Self {
        self.bottom = Some(value);
        self
    }

    #[must_use]
    pub fn left(mut self, value: f64) -> Self {
        self.left = Some(value);
        self
    }
}

fn resolve_margin_field(name: &str, value: Option<f64>, current: u32) -> GanttResult<u32> {
    let Some(value) = value else {
        return Ok(current);
    };
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(GanttError::InvalidInput(format!(
            "`{name}` margin must be a finite number >= 0, got {value}"
        )));
    }
    Ok(value.trunc() as u32)
}
