use tracing::trace;

use crate::error::{GanttError, GanttResult};
use crate::render::Renderer;

use super::GanttChart;
use super::render_coordinator::RenderCoordinator;
use super::time_scale_zoom_factor_resolver::resolve_wheel_zoom_factor;

impl<R: Renderer> GanttChart<R> {
    /// Current time domain `(start, end)` in ms since the epoch.
    #[must_use]
    pub fn time_domain(&self) -> (f64, f64) {
        self.core.model.time_scale.domain()
    }

    /// Wheel zoom anchored at chart-space `x`.
    ///
    /// Returns `false` when zoom is disabled or the delta is zero; the domain
    /// is then left untouched.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> GanttResult<bool> {
        if !self.core.behavior.features.zoom {
            return Ok(false);
        }
        let Some(factor) = resolve_wheel_zoom_factor(delta_y, self.core.behavior.zoom_step_ratio)?
        else {
            return Ok(false);
        };
        let (plot_x, _) = self.core.model.to_plot(x, y);
        self.zoom_time_around_pixel(factor, plot_x)
    }

    /// Zooms the time domain by `factor` around plot-local `anchor_x`.
    /// `factor > 1` zooms in.
    pub fn zoom_time_around_pixel(&mut self, factor: f64, anchor_x: f64) -> GanttResult<bool> {
        if !self.core.behavior.features.zoom {
            return Ok(false);
        }
        let min_span = self.core.behavior.min_time_span;
        self.core
            .model
            .time_scale
            .zoom_around_pixel(factor, anchor_x, min_span)?;
        trace!(factor, anchor_x, domain = ?self.time_domain(), "time axis zoomed");
        RenderCoordinator::render(self)?;
        Ok(true)
    }

    /// Pans the time domain so content follows a `delta_px` pointer move.
    pub fn pan_time(&mut self, delta_px: f64) -> GanttResult<bool> {
        if !self.core.behavior.features.zoom {
            return Ok(false);
        }
        if !delta_px.is_finite() {
            return Err(GanttError::InvalidInput(
                "pan delta must be finite".to_owned(),
            ));
        }
        if delta_px == 0.0 {
            return Ok(false);
        }
        self.core.model.time_scale.pan_by_pixels(delta_px)?;
        trace!(delta_px, domain = ?self.time_domain(), "time axis panned");
        RenderCoordinator::render(self)?;
        Ok(true)
    }
}
