use crate::core::{ItemId, Viewport};
use crate::error::{GanttError, GanttResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Retained visual counterpart of one item: its bar and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemVisual {
    pub id: ItemId,
    pub rect: RectPrimitive,
    pub label: TextPrimitive,
    /// Styling hint, the item's `class` or `"success"`.
    pub class: String,
}

impl ItemVisual {
    pub fn validate(&self) -> GanttResult<()> {
        self.rect.validate()?;
        self.label.validate()
    }

    /// Re-centres the label horizontally over the bar.
    pub fn recenter_label(&mut self) {
        self.label.x = self.rect.center_x();
    }
}

/// Floating info panel state. Coordinates are chart-space pointer positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Backend-agnostic scene for one full render cycle.
///
/// Item, axis and lane-label geometry is plot-local: backends translate by
/// `plot_origin` and clip to `plot_width × plot_height`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub plot_origin: (f64, f64),
    pub plot_width: f64,
    pub plot_height: f64,
    /// Every item visual, in draw order.
    pub items: Vec<ItemVisual>,
    /// Ids whose visuals were created by this cycle.
    pub created: Vec<ItemId>,
    /// Ids whose visuals were dropped by this cycle.
    pub removed: Vec<ItemId>,
    pub axis_lines: Vec<LinePrimitive>,
    pub axis_labels: Vec<TextPrimitive>,
    pub lane_labels: Vec<TextPrimitive>,
    pub tooltip: TooltipState,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, plot_origin: (f64, f64), plot_size: (f64, f64)) -> Self {
        Self {
            viewport,
            plot_origin,
            plot_width: plot_size.0,
            plot_height: plot_size.1,
            items: Vec::new(),
            created: Vec::new(),
            removed: Vec::new(),
            axis_lines: Vec::new(),
            axis_labels: Vec::new(),
            lane_labels: Vec::new(),
            tooltip: TooltipState::default(),
        }
    }

    pub fn validate(&self) -> GanttResult<()> {
        if !self.viewport.is_valid() {
            return Err(GanttError::Render(format!(
                "invalid viewport size: width={}, height={}",
                self.viewport.width, self.viewport.height
            )));
        }

        for item in &self.items {
            item.validate()?;
        }
        for line in &self.axis_lines {
            line.validate()?;
        }
        for text in self.axis_labels.iter().chain(&self.lane_labels) {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&ItemVisual> {
        self.items.iter().find(|visual| &visual.id == id)
    }
}
