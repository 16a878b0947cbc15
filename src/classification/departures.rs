//! Late departure detection.

use chrono::{NaiveDateTime, Timelike};

use crate::config::LateDepartureRule;

/// Returns true when the day's departure falls past the exit boundary.
///
/// With the default rule a departure counts when its hour is past 22, or
/// exactly 22 with minute at or past 20.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::is_late_departure;
/// use attendance_engine::config::LateDepartureRule;
/// use chrono::NaiveDateTime;
///
/// let rule = LateDepartureRule::default();
/// let departure =
///     NaiveDateTime::parse_from_str("2024-01-11 23:10:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_late_departure(departure, &rule));
/// ```
pub fn is_late_departure(departure: NaiveDateTime, rule: &LateDepartureRule) -> bool {
    let hour = departure.hour();
    hour > rule.hour || (hour == rule.hour && departure.minute() >= rule.minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn departure(t: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("2024-01-11 {}", t), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_boundary_hour_minute_threshold() {
        let rule = LateDepartureRule::default();
        assert!(!is_late_departure(departure("22:19:00"), &rule));
        assert!(is_late_departure(departure("22:20:00"), &rule));
        assert!(is_late_departure(departure("22:59:00"), &rule));
    }

    #[test]
    fn test_past_boundary_hour_any_minute() {
        let rule = LateDepartureRule::default();
        assert!(is_late_departure(departure("23:00:00"), &rule));
        assert!(is_late_departure(departure("23:10:00"), &rule));
    }

    #[test]
    fn test_earlier_departures_are_not_late() {
        let rule = LateDepartureRule::default();
        assert!(!is_late_departure(departure("21:59:00"), &rule));
        assert!(!is_late_departure(departure("17:00:00"), &rule));
    }
}
