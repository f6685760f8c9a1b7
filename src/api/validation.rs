use crate::core::{Item, MAX_LANES};
use crate::error::{GanttError, GanttResult};

use super::GanttChartConfig;

pub(super) fn validate_items(items: &[Item]) -> GanttResult<()> {
    for item in items {
        if !item.start.is_finite() || !item.end.is_finite() {
            return Err(GanttError::InvalidInput(format!(
                "item `{}` start and end must be finite, got start={}, end={}",
                item.id, item.start, item.end
            )));
        }
        if item.lane >= MAX_LANES {
            return Err(GanttError::InvalidInput(format!(
                "item `{}` lane must be < {MAX_LANES}, got {}",
                item.id, item.lane
            )));
        }
    }
    Ok(())
}

pub(super) fn validate_row_height(row_height_px: f64) -> GanttResult<()> {
    if !row_height_px.is_finite() || row_height_px <= 0.0 {
        return Err(GanttError::InvalidInput(format!(
            "row height must be finite and > 0, got {row_height_px}"
        )));
    }
    Ok(())
}

pub(super) fn validate_config(config: &GanttChartConfig) -> GanttResult<()> {
    validate_row_height(config.row_height_px)?;
    if !config.drag_edge_margin_px.is_finite() || config.drag_edge_margin_px < 0.0 {
        return Err(GanttError::InvalidInput(format!(
            "drag edge margin must be finite and >= 0, got {}",
            config.drag_edge_margin_px
        )));
    }
    if !config.zoom_step_ratio.is_finite() || config.zoom_step_ratio <= 0.0 {
        return Err(GanttError::InvalidInput(format!(
            "zoom step ratio must be finite and > 0, got {}",
            config.zoom_step_ratio
        )));
    }
    if !config.min_time_span.is_finite() || config.min_time_span <= 0.0 {
        return Err(GanttError::InvalidInput(format!(
            "min time span must be finite and > 0, got {}",
            config.min_time_span
        )));
    }
    if config.time_tick_count == 0 {
        return Err(GanttError::InvalidInput(
            "time tick count must be >= 1".to_owned(),
        ));
    }
    validate_items(&config.items)
}
