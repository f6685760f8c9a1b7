use chrono::{DateTime, Utc};

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Converts milliseconds since the Unix epoch to a UTC datetime.
///
/// Sub-millisecond precision is dropped; `None` for non-finite or
/// out-of-range values.
#[must_use]
pub fn unix_millis_to_datetime(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{datetime_to_unix_millis, unix_millis_to_datetime};

    #[test]
    fn millis_round_trip() {
        let time = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 30, 0)
            .single()
            .expect("valid datetime");
        let millis = datetime_to_unix_millis(time);
        assert_eq!(unix_millis_to_datetime(millis), Some(time));
        assert_eq!(unix_millis_to_datetime(f64::NAN), None);
    }
}
