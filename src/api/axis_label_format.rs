use chrono::Timelike;

use crate::core::unix_millis_to_datetime;

use super::axis_ticks::{DAY_MS, MINUTE_MS, SECOND_MS, TimeTickStep};

/// UTC label for a time-axis tick, precise enough to tell neighbours apart.
///
/// Sub-day steps show midnight ticks as a date so day boundaries stay
/// readable.
pub(super) fn format_time_tick_label(time_ms: f64, step: TimeTickStep) -> String {
    let Some(time) = unix_millis_to_datetime(time_ms) else {
        return String::new();
    };
    let pattern = match step {
        TimeTickStep::Millis(step) if step < SECOND_MS => "%H:%M:%S%.3f",
        TimeTickStep::Millis(step) if step < MINUTE_MS => "%H:%M:%S",
        TimeTickStep::Millis(step) if step < DAY_MS => {
            if time.hour() == 0 && time.minute() == 0 {
                "%b %d"
            } else {
                "%H:%M"
            }
        }
        TimeTickStep::Millis(_) => "%b %d",
        TimeTickStep::Months(_) => "%b %Y",
        TimeTickStep::Years(_) => "%Y",
    };
    time.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::format_time_tick_label;
    use crate::api::axis_ticks::{HOUR_MS, TimeTickStep};
    use crate::core::datetime_to_unix_millis;

    fn millis(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
        datetime_to_unix_millis(
            Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
                .single()
                .expect("valid datetime"),
        )
    }

    #[test]
    fn label_precision_follows_step() {
        let time = millis(2024, 3, 5, 14, 30);
        assert_eq!(format_time_tick_label(time, TimeTickStep::Millis(HOUR_MS)), "14:30");
        assert_eq!(format_time_tick_label(time, TimeTickStep::Millis(1_000.0)), "14:30:00");
        assert_eq!(format_time_tick_label(time, TimeTickStep::Months(1)), "Mar 2024");
        assert_eq!(format_time_tick_label(time, TimeTickStep::Years(1)), "2024");
    }

    #[test]
    fn midnight_hour_ticks_show_the_date() {
        let midnight = millis(2024, 3, 5, 0, 0);
        assert_eq!(
            format_time_tick_label(midnight, TimeTickStep::Millis(HOUR_MS)),
            "Mar 05"
        );
        assert_eq!(format_time_tick_label(f64::NAN, TimeTickStep::Years(1)), "");
    }
}
