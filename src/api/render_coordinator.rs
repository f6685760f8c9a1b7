use tracing::trace;

use crate::error::GanttResult;
use crate::render::{RenderFrame, Renderer};

use super::GanttChart;
use super::axis_frame_builder::{
    AxisPrimitives, build_lane_axis, build_lane_labels, build_time_axis,
};
use super::item_layout::ItemLayoutContext;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    /// Full render cycle: reconciles item visuals by id, rebuilds axes and
    /// lane labels, hides the tooltip and hands the frame to the renderer.
    pub(super) fn render<R: Renderer>(engine: &mut GanttChart<R>) -> GanttResult<()> {
        let frame = build_render_frame(engine);
        engine.renderer.render(&frame)?;
        engine.core.runtime.stats.render_passes += 1;
        trace!(
            items = frame.items.len(),
            created = frame.created.len(),
            removed = frame.removed.len(),
            axis_lines = frame.axis_lines.len(),
            "render cycle delivered"
        );
        Ok(())
    }
}

fn build_render_frame<R: Renderer>(engine: &mut GanttChart<R>) -> RenderFrame {
    let core = &mut engine.core;
    let model = &core.model;
    let features = core.behavior.features;
    let (plot_width, plot_height) = model.plot_size();

    let layout = ItemLayoutContext {
        time_scale: model.time_scale,
        lane_scale: model.lane_scale,
        row_height_px: model.row_height_px,
        sublanes: model.sublanes,
    };
    let diff = core
        .scene
        .reconcile(model.items.iter().map(|item| layout.layout(item)));

    let mut axes = AxisPrimitives::default();
    build_time_axis(
        model.time_scale,
        plot_height,
        core.behavior.time_tick_count,
        features.x_grid,
        &mut axes,
    );
    build_lane_axis(model.lane_scale, plot_width, features.y_grid, &mut axes);

    core.runtime.tooltip.visible = false;

    let mut frame = RenderFrame::new(model.viewport, model.plot_origin(), (plot_width, plot_height));
    frame.items = core.scene.iter().cloned().collect();
    frame.created = diff.created;
    frame.removed = diff.removed;
    frame.axis_lines = axes.lines;
    frame.axis_labels = axes.labels;
    if features.lane_labels {
        frame.lane_labels = build_lane_labels(
            &model.lane_labels,
            model.lane_scale,
            f64::from(model.margins.left),
        );
    }
    frame.tooltip = core.runtime.tooltip.clone();
    frame
}
