use crate::core::LinearScale;
use crate::error::GanttResult;

/// Vertical mapping: lane index domain `[0, lane_count]` ↔ plot-local y pixel
/// range `[0, plot_height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneScale {
    lane_count: usize,
    linear: LinearScale,
}

impl LaneScale {
    pub fn new(lane_count: usize, height_px: f64) -> GanttResult<Self> {
        Ok(Self {
            lane_count,
            linear: LinearScale::new((0.0, lane_count as f64), (0.0, height_px))?,
        })
    }

    #[must_use]
    pub fn lane_count(self) -> usize {
        self.lane_count
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        self.linear.range().1
    }

    pub fn set_lane_count(&mut self, lane_count: usize) -> GanttResult<()> {
        self.linear.set_domain(0.0, lane_count as f64)?;
        self.lane_count = lane_count;
        Ok(())
    }

    pub fn set_height_px(&mut self, height_px: f64) -> GanttResult<()> {
        self.linear.set_range(0.0, height_px)
    }

    /// Pixel band height allotted to one lane.
    #[must_use]
    pub fn band_px(self) -> f64 {
        if self.lane_count == 0 {
            return 0.0;
        }
        self.height_px() / self.lane_count as f64
    }

    /// Top edge of a (possibly fractional) lane position.
    #[must_use]
    pub fn lane_to_pixel(self, lane: f64) -> f64 {
        self.linear.forward(lane)
    }

    #[must_use]
    pub fn pixel_to_lane(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    /// Lane whose band contains `pixel`, clamped to `[0, lane_count - 1]`.
    #[must_use]
    pub fn lane_at_pixel(self, pixel: f64) -> usize {
        clamp_lane(self.pixel_to_lane(pixel).floor(), self.lane_count)
    }

    /// Clamps a stored lane index into the drawable range.
    #[must_use]
    pub fn clamp_index(self, lane: usize) -> usize {
        lane.min(self.lane_count.saturating_sub(1))
    }
}

fn clamp_lane(raw: f64, lane_count: usize) -> usize {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    let last = lane_count.saturating_sub(1);
    if raw >= last as f64 {
        return last;
    }
    raw as usize
}

#[cfg(test)]
mod tests {
    use super::LaneScale;

    #[test]
    fn lane_at_pixel_floors_and_clamps() {
        let scale = LaneScale::new(3, 300.0).expect("scale");
        assert_eq!(scale.lane_at_pixel(-25.0), 0);
        assert_eq!(scale.lane_at_pixel(99.9), 0);
        assert_eq!(scale.lane_at_pixel(100.0), 1);
        assert_eq!(scale.lane_at_pixel(250.0), 2);
        assert_eq!(scale.lane_at_pixel(900.0), 2);
    }

    #[test]
    fn empty_lane_domain_is_harmless() {
        let scale = LaneScale::new(0, 300.0).expect("scale");
        assert_eq!(scale.band_px(), 0.0);
        assert_eq!(scale.lane_to_pixel(2.0), 0.0);
        assert_eq!(scale.lane_at_pixel(120.0), 0);
        assert_eq!(scale.clamp_index(4), 0);
    }
}
