use tracing::debug;

use crate::core::{TimeBounds, Viewport};
use crate::error::GanttResult;
use crate::interaction::InteractionState;
use crate::render::{Renderer, Scene};

use super::chart_model::{GanttModel, GanttModelBootstrap};
use super::validation::validate_config;
use super::{
    GanttChart, GanttChartConfig, chart_behavior::ChartBehaviorState,
    chart_runtime::ChartRuntimeState, engine_core::EngineCore,
    render_coordinator::RenderCoordinator,
};

impl<R: Renderer> GanttChart<R> {
    /// Creates a chart, packs and lays out the configured items and delivers
    /// the first frame to `renderer`.
    ///
    /// A zero width or height falls back to the default 640×480 size.
    pub fn new(renderer: R, config: GanttChartConfig) -> GanttResult<Self> {
        validate_config(&config)?;
        let time_bounds = TimeBounds {
            start: config.start_time,
            end: config.end_time,
        }
        .validate()?;

        let fallback = Viewport::default();
        let viewport = Viewport::new(
            if config.viewport.width == 0 {
                fallback.width
            } else {
                config.viewport.width
            },
            if config.viewport.height == 0 {
                fallback.height
            } else {
                config.viewport.height
            },
        );
        if viewport != config.viewport {
            debug!(
                requested_width = config.viewport.width,
                requested_height = config.viewport.height,
                "zero chart dimension replaced by default"
            );
        }

        let model = GanttModel::new(GanttModelBootstrap {
            items: config.items,
            lane_labels: config.lanes,
            viewport,
            margins: config.margins,
            row_height_px: config.row_height_px,
            time_bounds,
        })?;

        let mut chart = Self {
            renderer,
            core: EngineCore {
                model,
                behavior: ChartBehaviorState {
                    features: config.features,
                    time_tick_count: config.time_tick_count,
                    drag_edge_margin_px: config.drag_edge_margin_px,
                    zoom_step_ratio: config.zoom_step_ratio,
                    min_time_span: config.min_time_span,
                },
                scene: Scene::new(),
                interaction: InteractionState::default(),
                runtime: ChartRuntimeState::default(),
            },
        };

        chart.core.model.sync_lane_labels(true);
        chart.pack_pass();
        chart.core.model.apply_layout()?;
        RenderCoordinator::render(&mut chart)?;
        debug!(
            items = chart.core.model.items.len(),
            lanes = chart.core.model.lane_count(),
            sublanes = chart.core.model.sublanes,
            "gantt chart initialized"
        );
        Ok(chart)
    }
}
