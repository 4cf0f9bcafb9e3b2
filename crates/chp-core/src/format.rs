//! Compact human-readable duration formatting.

use chrono::TimeDelta;

/// Formats a time span using its largest applicable unit breakdown.
///
/// Remainders truncate toward zero, so `90061000` ms renders as
/// `"1d 1h 1m 1s"` and anything under a second renders as `"0s"`.
/// Negative spans saturate to `"0s"`; callers pass magnitudes.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let h = hours % 24;
    let m = minutes % 60;
    let s = seconds % 60;

    if days > 0 {
        format!("{days}d {h}h {m}m {s}s")
    } else if hours > 0 {
        format!("{hours}h {m}m {s}s")
    } else if minutes > 0 {
        format!("{minutes}m {s}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_days_breakdown() {
        assert_eq!(format_duration(TimeDelta::milliseconds(90_061_000)), "1d 1h 1m 1s");
    }

    #[test]
    fn formats_hours_breakdown() {
        assert_eq!(format_duration(TimeDelta::milliseconds(3_661_000)), "1h 1m 1s");
    }

    #[test]
    fn formats_minutes_breakdown() {
        assert_eq!(format_duration(TimeDelta::milliseconds(61_000)), "1m 1s");
    }

    #[test]
    fn sub_second_truncates_to_zero() {
        assert_eq!(format_duration(TimeDelta::milliseconds(999)), "0s");
    }

    #[test]
    fn exact_unit_boundaries() {
        assert_eq!(format_duration(TimeDelta::minutes(60)), "1h 0m 0s");
        assert_eq!(format_duration(TimeDelta::hours(24)), "1d 0h 0m 0s");
        assert_eq!(format_duration(TimeDelta::seconds(60)), "1m 0s");
    }

    #[test]
    fn negative_saturates_to_zero() {
        assert_eq!(format_duration(TimeDelta::seconds(-90)), "0s");
    }
}
