use crate::core::{LaneScale, TimeScale};
use crate::render::{Color, LinePrimitive, TextHAlign, TextPrimitive};

use super::axis_label_format::format_time_tick_label;
use super::axis_ticks::{generate_time_ticks, select_time_tick_step};

/// Inward tick length when grid lines are off.
const AXIS_TICK_SIZE_PX: f64 = 6.0;
const AXIS_STROKE_WIDTH_PX: f64 = 1.0;
const GRID_STROKE_WIDTH_PX: f64 = 0.5;
const TIME_LABEL_FONT_PX: f64 = 10.0;
/// Gap between the time axis and the vertical centre of its labels.
const TIME_LABEL_OFFSET_PX: f64 = 12.0;
const LANE_LABEL_FONT_PX: f64 = 12.0;

#[derive(Debug, Default)]
pub(super) struct AxisPrimitives {
    pub(super) lines: Vec<LinePrimitive>,
    pub(super) labels: Vec<TextPrimitive>,
}

/// Time axis along the plot bottom. Ticks reach across the plot when
/// `show_grid` is set and are short inward marks otherwise.
pub(super) fn build_time_axis(
    time_scale: TimeScale,
    plot_height: f64,
    tick_count: usize,
    show_grid: bool,
    out: &mut AxisPrimitives,
) {
    let plot_width = time_scale.width_px();
    out.lines.push(LinePrimitive::new(
        0.0,
        plot_height,
        plot_width,
        plot_height,
        AXIS_STROKE_WIDTH_PX,
        Color::AXIS,
    ));

    let (start, end) = time_scale.domain();
    let step = select_time_tick_step(end - start, tick_count);
    let tick_top = if show_grid {
        0.0
    } else {
        plot_height - AXIS_TICK_SIZE_PX
    };
    let (stroke, color) = if show_grid {
        (GRID_STROKE_WIDTH_PX, Color::GRID)
    } else {
        (AXIS_STROKE_WIDTH_PX, Color::AXIS)
    };

    for tick in generate_time_ticks(start, end, step) {
        let x = time_scale.time_to_pixel(tick);
        if !x.is_finite() {
            continue;
        }
        out.lines
            .push(LinePrimitive::new(x, plot_height, x, tick_top, stroke, color));
        out.labels.push(TextPrimitive::new(
            format_time_tick_label(tick, step),
            x,
            plot_height + TIME_LABEL_OFFSET_PX,
            TIME_LABEL_FONT_PX,
            Color::AXIS,
            TextHAlign::Center,
        ));
    }
}

/// Lane axis along the plot's left edge with one tick per lane boundary.
pub(super) fn build_lane_axis(
    lane_scale: LaneScale,
    plot_width: f64,
    show_grid: bool,
    out: &mut AxisPrimitives,
) {
    out.lines.push(LinePrimitive::new(
        0.0,
        0.0,
        0.0,
        lane_scale.height_px(),
        AXIS_STROKE_WIDTH_PX,
        Color::AXIS,
    ));

    let (tick_end, stroke, color) = if show_grid {
        (plot_width, GRID_STROKE_WIDTH_PX, Color::GRID)
    } else {
        (AXIS_TICK_SIZE_PX, AXIS_STROKE_WIDTH_PX, Color::AXIS)
    };
    for lane in 0..=lane_scale.lane_count() {
        let y = lane_scale.lane_to_pixel(lane as f64);
        out.lines
            .push(LinePrimitive::new(0.0, y, tick_end, y, stroke, color));
    }
}

/// Lane names left-aligned at the chart's left edge, each vertically centred
/// on its lane. Empty labels are skipped.
pub(super) fn build_lane_labels(
    labels: &[String],
    lane_scale: LaneScale,
    margin_left: f64,
) -> Vec<TextPrimitive> {
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| !label.is_empty())
        .map(|(lane, label)| {
            TextPrimitive::new(
                label.clone(),
                -margin_left,
                lane_scale.lane_to_pixel(lane as f64 + 0.5),
                LANE_LABEL_FONT_PX,
                Color::LANE_LABEL,
                TextHAlign::Left,
            )
        })
        .collect()
}
