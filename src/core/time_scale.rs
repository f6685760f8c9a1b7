use serde::{Deserialize, Serialize};

use crate::core::{Item, LinearScale};
use crate::error::{GanttError, GanttResult};

/// Optional caller overrides for the time domain.
///
/// A `None` bound is derived from the item collection (earliest `start`,
/// latest `end`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeBounds {
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

impl TimeBounds {
    pub fn validate(self) -> GanttResult<Self> {
        for (name, value) in [("start", self.start), ("end", self.end)] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(GanttError::InvalidInput(format!(
                    "time bound `{name}` must be finite"
                )));
            }
        }
        Ok(self)
    }

    /// Resolves the domain for `items`, falling back to `(0, 0)` for an empty
    /// collection without overrides.
    #[must_use]
    pub fn resolve(self, items: &[Item]) -> (f64, f64) {
        let (data_start, data_end) = data_time_extent(items).unwrap_or((0.0, 0.0));
        (
            self.start.unwrap_or(data_start),
            self.end.unwrap_or(data_end),
        )
    }
}

/// Earliest start and latest end across `items`, ignoring non-finite times.
#[must_use]
pub fn data_time_extent(items: &[Item]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for item in items {
        if item.start.is_finite() {
            min = min.min(item.start);
        }
        if item.end.is_finite() {
            max = max.max(item.end);
        }
    }

    match (min.is_finite(), max.is_finite()) {
        (true, true) => Some((min, max)),
        (true, false) => Some((min, min)),
        (false, true) => Some((max, max)),
        (false, false) => None,
    }
}

/// Horizontal mapping: time (ms since epoch) ↔ plot-local x pixel.
///
/// The range always starts at zero; its end is the plot width. Zoom and pan
/// only ever touch the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64, width_px: f64) -> GanttResult<Self> {
        Ok(Self {
            linear: LinearScale::new((time_start, time_end), (0.0, width_px))?,
        })
    }

    pub fn fit(items: &[Item], bounds: TimeBounds, width_px: f64) -> GanttResult<Self> {
        let (start, end) = bounds.validate()?.resolve(items);
        Self::new(start, end, width_px)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    pub fn set_domain(&mut self, time_start: f64, time_end: f64) -> GanttResult<()> {
        self.linear.set_domain(time_start, time_end)
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.linear.range().1
    }

    pub fn set_width_px(&mut self, width_px: f64) -> GanttResult<()> {
        self.linear.set_range(0.0, width_px)
    }

    #[must_use]
    pub fn time_to_pixel(self, time: f64) -> f64 {
        self.linear.forward(time)
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    /// Shifts the domain so content follows a pointer moving `delta_px`.
    ///
    /// Positive deltas (drag to the right) reveal earlier times.
    pub fn pan_by_pixels(&mut self, delta_px: f64) -> GanttResult<()> {
        if !delta_px.is_finite() {
            return Err(GanttError::InvalidInput(
                "pan delta must be finite".to_owned(),
            ));
        }
        let delta_time = -delta_px * self.linear.domain_per_pixel();
        let (start, end) = self.domain();
        self.set_domain(start + delta_time, end + delta_time)
    }

    /// Zooms the domain around the time currently under `anchor_px`.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out. The resulting
    /// span magnitude never drops below `min_span`; its sign is kept.
    pub fn zoom_around_pixel(
        &mut self,
        factor: f64,
        anchor_px: f64,
        min_span: f64,
    ) -> GanttResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(GanttError::InvalidInput(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_px.is_finite() {
            return Err(GanttError::InvalidInput(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        if !min_span.is_finite() || min_span <= 0.0 {
            return Err(GanttError::InvalidInput(
                "zoom min span must be finite and > 0".to_owned(),
            ));
        }

        let anchor_time = self.pixel_to_time(anchor_px);
        let (start, end) = self.domain();
        let current_span = end - start;
        // Reversed domains stay reversed.
        let direction = if current_span < 0.0 { -1.0 } else { 1.0 };
        let target_span = (current_span.abs() / factor).max(min_span) * direction;
        let left_ratio = if current_span == 0.0 {
            0.5
        } else {
            (anchor_time - start) / current_span
        };

        let new_start = anchor_time - left_ratio * target_span;
        self.set_domain(new_start, new_start + target_span)
    }
}
