use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Countdown label, e.g. `42s`.
#[must_use]
pub fn format_time_left(seconds: u32) -> String {
    format!("{seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathdash_core::time::fixed_now;

    #[test]
    fn datetime_is_minute_precision() {
        assert_eq!(format_datetime(fixed_now()), "2025-06-15 06:13");
    }

    #[test]
    fn countdown_is_plain_seconds() {
        assert_eq!(format_time_left(60), "60s");
        assert_eq!(format_time_left(0), "0s");
    }
}
