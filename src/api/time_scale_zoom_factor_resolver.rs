use crate::error::{GanttError, GanttResult};

/// Wheel delta reported for one notch.
const WHEEL_STEP_UNITS: f64 = 120.0;

/// Converts a wheel delta into a multiplicative zoom factor.
///
/// Negative deltas (wheel up) zoom in: `(1 + ratio)^(-delta / 120)`.
pub(super) fn resolve_wheel_zoom_factor(
    wheel_delta_y: f64,
    zoom_step_ratio: f64,
) -> GanttResult<Option<f64>> {
    if !wheel_delta_y.is_finite() {
        return Err(GanttError::InvalidInput(
            "wheel delta must be finite".to_owned(),
        ));
    }
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }

    let normalized_steps = wheel_delta_y / WHEEL_STEP_UNITS;
    let factor = (1.0 + zoom_step_ratio).powf(-normalized_steps);
    if !factor.is_finite() || factor <= 0.0 {
        return Err(GanttError::InvalidInput(
            "computed wheel zoom factor must be finite and > 0".to_owned(),
        ));
    }
    Ok(Some(factor))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::resolve_wheel_zoom_factor;

    #[test]
    fn zero_wheel_delta_returns_none() {
        assert!(resolve_wheel_zoom_factor(0.0, 0.2).expect("factor").is_none());
    }

    #[test]
    fn one_notch_scales_by_step_ratio() {
        let zoom_in = resolve_wheel_zoom_factor(-120.0, 0.2)
            .expect("factor")
            .expect("some");
        assert_relative_eq!(zoom_in, 1.2, epsilon = 1e-12);

        let zoom_out = resolve_wheel_zoom_factor(240.0, 0.2)
            .expect("factor")
            .expect("some");
        assert_relative_eq!(zoom_out, 1.0 / 1.44, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_delta_is_rejected() {
        let err = resolve_wheel_zoom_factor(f64::NAN, 0.2).expect_err("nan must fail");
        assert!(format!("{err}").contains("wheel delta"));
    }
}
