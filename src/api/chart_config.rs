use serde::{Deserialize, Serialize};

use crate::core::{Item, Margins, Viewport};
use crate::error::{GanttError, GanttResult};
use crate::interaction::DEFAULT_DRAG_EDGE_MARGIN_PX;

fn default_true() -> bool {
    true
}

fn default_row_height_px() -> f64 {
    35.0
}

fn default_time_tick_count() -> usize {
    20
}

fn default_drag_edge_margin_px() -> f64 {
    DEFAULT_DRAG_EDGE_MARGIN_PX
}

fn default_zoom_step_ratio() -> f64 {
    0.2
}

fn default_min_time_span() -> f64 {
    1.0
}

/// Boolean feature switches exposed through the public toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureToggles {
    /// Follow host container size notifications.
    #[serde(default = "default_true")]
    pub autoresize: bool,
    /// Allow moving items by dragging their body.
    #[serde(default = "default_true")]
    pub drag: bool,
    /// Allow resizing items by dragging near an edge.
    #[serde(default = "default_true")]
    pub item_resize: bool,
    #[serde(default = "default_true")]
    pub tooltip: bool,
    /// Wheel zoom and background-drag pan of the time axis.
    #[serde(default = "default_true")]
    pub zoom: bool,
    /// Extend time-axis ticks across the plot.
    #[serde(default = "default_true")]
    pub x_grid: bool,
    /// Extend lane-axis ticks across the plot.
    #[serde(default = "default_true")]
    pub y_grid: bool,
    #[serde(default = "default_true")]
    pub lane_labels: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            autoresize: true,
            drag: true,
            item_resize: true,
            tooltip: true,
            zoom: true,
            x_grid: true,
            y_grid: true,
            lane_labels: true,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Every field has a default, so a partial JSON document is enough to build a
/// chart: missing fields fall back to the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttChartConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_row_height_px")]
    pub row_height_px: f64,
    /// Explicit time-domain start; derived from items when `None`.
    #[serde(default)]
    pub start_time: Option<f64>,
    /// Explicit time-domain end; derived from items when `None`.
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub lanes: Vec<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub features: FeatureToggles,
    /// Target number of time-axis ticks.
    #[serde(default = "default_time_tick_count")]
    pub time_tick_count: usize,
    #[serde(default = "default_drag_edge_margin_px")]
    pub drag_edge_margin_px: f64,
    /// Span change per wheel notch (`0.2` = 20%).
    #[serde(default = "default_zoom_step_ratio")]
    pub zoom_step_ratio: f64,
    /// Smallest time span zoom may reach, in milliseconds.
    #[serde(default = "default_min_time_span")]
    pub min_time_span: f64,
}

impl Default for GanttChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::default(),
            row_height_px: default_row_height_px(),
            start_time: None,
            end_time: None,
            lanes: Vec::new(),
            items: Vec::new(),
            features: FeatureToggles::default(),
            time_tick_count: default_time_tick_count(),
            drag_edge_margin_px: default_drag_edge_margin_px(),
            zoom_step_ratio: default_zoom_step_ratio(),
            min_time_span: default_min_time_span(),
        }
    }
}

impl GanttChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Parses a (possibly partial) JSON configuration document.
    pub fn from_json_str(input: &str) -> GanttResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            GanttError::InvalidInput(format!("failed to parse chart config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> GanttResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GanttError::InvalidInput(format!("failed to serialize chart config: {e}"))
        })
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_row_height(mut self, row_height_px: f64) -> Self {
        self.row_height_px = row_height_px;
        self
    }

    /// Fixes the time domain instead of deriving it from the items.
    #[must_use]
    pub fn with_time_domain(mut self, start_time: f64, end_time: f64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    #[must_use]
    pub fn with_lanes<I, S>(mut self, lanes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lanes = lanes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: FeatureToggles) -> Self {
        self.features = features;
        self
    }

    #[must_use]
    pub fn with_drag_edge_margin(mut self, drag_edge_margin_px: f64) -> Self {
        self.drag_edge_margin_px = drag_edge_margin_px;
        self
    }

    #[must_use]
    pub fn with_zoom_tuning(mut self, zoom_step_ratio: f64, min_time_span: f64) -> Self {
        self.zoom_step_ratio = zoom_step_ratio;
        self.min_time_span = min_time_span;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::GanttChartConfig;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = GanttChartConfig::from_json_str(
            r#"{"margins":{"top":5,"right":5,"bottom":5,"left":50},"features":{"zoom":false}}"#,
        )
        .expect("valid config json");

        assert_eq!(config.margins.left, 50);
        assert!(!config.features.zoom);
        assert!(config.features.drag);
        assert_eq!(config.row_height_px, 35.0);
        assert_eq!(config.viewport.width, 640);
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        let err = GanttChartConfig::from_json_str("[1,2]").expect_err("array is not a config");
        assert!(format!("{err}").contains("chart config json"));
    }
}
