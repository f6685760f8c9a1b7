use chrono::{Datelike, NaiveDate};

use crate::core::{datetime_to_unix_millis, unix_millis_to_datetime};

pub(super) const SECOND_MS: f64 = 1_000.0;
pub(super) const MINUTE_MS: f64 = 60.0 * SECOND_MS;
pub(super) const HOUR_MS: f64 = 60.0 * MINUTE_MS;
pub(super) const DAY_MS: f64 = 24.0 * HOUR_MS;
const WEEK_MS: f64 = 7.0 * DAY_MS;
const APPROX_MONTH_MS: f64 = 30.0 * DAY_MS;
const APPROX_YEAR_MS: f64 = 365.0 * DAY_MS;

/// Upper bound on generated ticks regardless of the requested count.
const MAX_TIME_TICKS: usize = 1_000;

/// Calendar-friendly fixed steps, finest first.
const FIXED_STEPS_MS: [f64; 15] = [
    SECOND_MS,
    5.0 * SECOND_MS,
    15.0 * SECOND_MS,
    30.0 * SECOND_MS,
    MINUTE_MS,
    5.0 * MINUTE_MS,
    15.0 * MINUTE_MS,
    30.0 * MINUTE_MS,
    HOUR_MS,
    3.0 * HOUR_MS,
    6.0 * HOUR_MS,
    12.0 * HOUR_MS,
    DAY_MS,
    2.0 * DAY_MS,
    WEEK_MS,
];

const MONTH_STEPS: [u32; 2] = [1, 3];

/// Spacing between time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum TimeTickStep {
    /// Fixed-length step aligned to multiples since the epoch.
    Millis(f64),
    /// Calendar months, aligned to the first of the month.
    Months(u32),
    /// Calendar years, aligned to January 1st.
    Years(u32),
}

/// Smallest 1-2-5 step not below `ideal`.
fn nice_step(ideal: f64) -> f64 {
    if !ideal.is_finite() || ideal <= 0.0 {
        return 1.0;
    }
    let power = 10f64.powf(ideal.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|multiplier| multiplier * power)
        .find(|step| *step >= ideal)
        .unwrap_or(10.0 * power)
}

/// Picks the smallest step yielding at most roughly `target_count` ticks
/// over `span_ms`.
pub(super) fn select_time_tick_step(span_ms: f64, target_count: usize) -> TimeTickStep {
    let ideal = span_ms.abs() / target_count.max(1) as f64;
    if ideal < SECOND_MS {
        return TimeTickStep::Millis(nice_step(ideal));
    }
    if let Some(step) = FIXED_STEPS_MS.into_iter().find(|step| *step >= ideal) {
        return TimeTickStep::Millis(step);
    }
    if let Some(months) = MONTH_STEPS
        .into_iter()
        .find(|months| f64::from(*months) * APPROX_MONTH_MS >= ideal)
    {
        return TimeTickStep::Months(months);
    }
    let years = nice_step(ideal / APPROX_YEAR_MS).max(1.0);
    TimeTickStep::Years(years.min(f64::from(u32::MAX)) as u32)
}

/// Tick times within `[start, end]` (either order) for `step`.
pub(super) fn generate_time_ticks(start: f64, end: f64, step: TimeTickStep) -> Vec<f64> {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    if !lo.is_finite() || !hi.is_finite() || hi <= lo {
        return Vec::new();
    }

    match step {
        TimeTickStep::Millis(step) => {
            let first = (lo / step).ceil() * step;
            (0..MAX_TIME_TICKS)
                .map(|index| first + index as f64 * step)
                .take_while(|tick| *tick <= hi)
                .collect()
        }
        TimeTickStep::Months(months) => calendar_ticks(lo, hi, months, 1),
        TimeTickStep::Years(years) => calendar_ticks(lo, hi, years, 12),
    }
}

/// First-of-month ticks every `count × months_per_unit` months.
fn calendar_ticks(lo: f64, hi: f64, count: u32, months_per_unit: u32) -> Vec<f64> {
    let Some(first) = unix_millis_to_datetime(lo) else {
        return Vec::new();
    };
    let stride = i64::from(count.max(1)) * i64::from(months_per_unit);
    let month_index = i64::from(first.year()) * 12 + i64::from(first.month0());
    let aligned = month_index - month_index.rem_euclid(stride);

    let mut ticks = Vec::new();
    for step in 0..=(MAX_TIME_TICKS as i64) {
        let index = aligned + step * stride;
        let Ok(year) = i32::try_from(index.div_euclid(12)) else {
            break;
        };
        let month = index.rem_euclid(12) as u32 + 1;
        let Some(time) = NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| datetime_to_unix_millis(naive.and_utc()))
        else {
            break;
        };
        if time > hi || ticks.len() >= MAX_TIME_TICKS {
            break;
        }
        if time >= lo {
            ticks.push(time);
        }
    }
    ticks
}
