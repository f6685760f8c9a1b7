use crate::error::{GanttError, GanttResult};

/// Continuous linear mapping between a value domain and a pixel range.
///
/// Degenerate spans are tolerated: a zero-width domain maps every value to the
/// range start, and a zero-width range inverts every pixel to the domain start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> GanttResult<Self> {
        ensure_finite_pair("scale domain", domain)?;
        ensure_finite_pair("scale range", range)?;
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn set_domain(&mut self, start: f64, end: f64) -> GanttResult<()> {
        ensure_finite_pair("scale domain", (start, end))?;
        self.domain_start = start;
        self.domain_end = end;
        Ok(())
    }

    pub fn set_range(&mut self, start: f64, end: f64) -> GanttResult<()> {
        ensure_finite_pair("scale range", (start, end))?;
        self.range_start = start;
        self.range_end = end;
        Ok(())
    }

    /// Maps a domain value to pixel space.
    #[must_use]
    pub fn forward(self, value: f64) -> f64 {
        let t = normalize(value, self.domain_start, self.domain_end);
        self.range_start + t * (self.range_end - self.range_start)
    }

    /// Maps a pixel back to the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let t = normalize(pixel, self.range_start, self.range_end);
        self.domain_start + t * (self.domain_end - self.domain_start)
    }

    /// Domain units covered by one pixel; zero for a degenerate range.
    #[must_use]
    pub fn domain_per_pixel(self) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return 0.0;
        }
        (self.domain_end - self.domain_start) / range_span
    }
}

fn normalize(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span == 0.0 {
        return 0.0;
    }
    (value - start) / span
}

fn ensure_finite_pair(what: &str, (start, end): (f64, f64)) -> GanttResult<()> {
    if !start.is_finite() || !end.is_finite() {
        return Err(GanttError::InvalidInput(format!(
            "{what} bounds must be finite"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (10.0, 110.0)).expect("scale");
        assert_eq!(scale.forward(5.0), 10.0);
        assert_eq!(scale.forward(1_000.0), 10.0);
    }

    #[test]
    fn degenerate_range_inverts_to_domain_start() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 0.0)).expect("scale");
        assert_eq!(scale.invert(42.0), 0.0);
        assert_eq!(scale.domain_per_pixel(), 0.0);
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 1.0)).is_err());
        let mut scale = LinearScale::new((0.0, 1.0), (0.0, 1.0)).expect("scale");
        assert!(scale.set_range(f64::NAN, 1.0).is_err());
        assert_eq!(scale.range(), (0.0, 1.0));
    }
}
