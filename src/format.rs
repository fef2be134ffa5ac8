//! Display Formatting Helpers

use chrono::{DateTime, NaiveDateTime};

/// Format a non-negative uptime in seconds as "{h}h {m}m {s}s".
/// Truncates at each level; hours do not carry into days.
pub fn format_uptime(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{}h {}m {}s", hours, minutes, secs)
}

/// Best-effort timestamp display. The backend emits ISO-8601, sometimes
/// without a UTC offset; values that parse neither way are shown unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(ts) = raw.parse::<NaiveDateTime>() {
        return ts.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime_decomposes_hours_minutes_seconds() {
        assert_eq!(format_uptime(3661.0), "1h 1m 1s");
        assert_eq!(format_uptime(59.0), "0h 0m 59s");
        assert_eq!(format_uptime(0.0), "0h 0m 0s");
    }

    #[test]
    fn test_format_uptime_does_not_carry_past_hours() {
        assert_eq!(format_uptime(90000.0), "25h 0m 0s");
    }

    #[test]
    fn test_format_uptime_truncates_fractional_seconds() {
        assert_eq!(format_uptime(61.9), "0h 1m 1s");
    }

    #[test]
    fn test_format_timestamp_with_offset() {
        assert_eq!(
            format_timestamp("2025-03-04T10:15:30+00:00"),
            "2025-03-04 10:15:30"
        );
    }

    #[test]
    fn test_format_timestamp_without_offset() {
        // Python's datetime.isoformat() omits the offset for naive datetimes.
        assert_eq!(
            format_timestamp("2025-03-04T10:15:30.123456"),
            "2025-03-04 10:15:30"
        );
    }

    #[test]
    fn test_format_timestamp_passes_unparseable_values_through() {
        assert_eq!(format_timestamp("just now"), "just now");
    }
}
