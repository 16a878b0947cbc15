//! Shift classification rules.
//!
//! One employee-day maps to exactly one [`ShiftType`], chosen by the
//! first matching rule in a fixed precedence order. The ordering is
//! deliberate policy, not incidental: a single punch at 15:00 is a
//! single-punch day even though its hour would read as an evening
//! arrival, and a day that satisfies the double-shift rule never counts
//! as morning or evening.

use chrono::Timelike;

use crate::config::ShiftHours;
use crate::models::{DayPunches, ShiftType};

/// Classifies one day's punches into a shift type.
///
/// Rules are evaluated in this precedence order, first match wins:
///
/// 1. **SinglePunch** - exactly one punch that day, regardless of hour.
/// 2. **Double** - arrival hour before the evening boundary AND departure
///    hour at or past the double-departure boundary.
/// 3. **Morning** - arrival hour within the morning window.
/// 4. **Evening** - arrival hour at or past the evening boundary.
/// 5. **Unclassified** - none of the above (arrival before the morning
///    window on a multi-punch day that ends early). Contributes zero
///    shift units but the day still counts as attended.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::classify_shift;
/// use attendance_engine::config::ShiftHours;
/// use attendance_engine::models::{DayPunches, ShiftType};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let day = DayPunches::new(date, vec![
///     NaiveDateTime::parse_from_str("2024-01-10 09:05:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2024-01-10 13:50:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ]).unwrap();
///
/// assert_eq!(classify_shift(&day, &ShiftHours::default()), ShiftType::Morning);
/// ```
pub fn classify_shift(day: &DayPunches, hours: &ShiftHours) -> ShiftType {
    let arrival_hour = day.arrival().hour();
    let departure_hour = day.departure().hour();

    if day.is_single_punch() {
        ShiftType::SinglePunch
    } else if arrival_hour < hours.evening_start && departure_hour >= hours.double_departure_start {
        ShiftType::Double
    } else if arrival_hour >= hours.morning_start && arrival_hour < hours.evening_start {
        ShiftType::Morning
    } else if arrival_hour >= hours.evening_start {
        ShiftType::Evening
    } else {
        ShiftType::Unclassified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(times: &[&str]) -> DayPunches {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let punches = times
            .iter()
            .map(|t| {
                NaiveDateTime::parse_from_str(
                    &format!("2024-01-10 {}", t),
                    "%Y-%m-%d %H:%M:%S",
                )
                .unwrap()
            })
            .collect();
        DayPunches::new(date, punches).unwrap()
    }

    fn classify(times: &[&str]) -> ShiftType {
        classify_shift(&day(times), &ShiftHours::default())
    }

    #[test]
    fn test_single_punch_overrides_every_other_rule() {
        // Hours that would otherwise read as morning, evening, and the
        // start of a double shift.
        assert_eq!(classify(&["09:05:00"]), ShiftType::SinglePunch);
        assert_eq!(classify(&["15:20:00"]), ShiftType::SinglePunch);
        assert_eq!(classify(&["23:00:00"]), ShiftType::SinglePunch);
    }

    #[test]
    fn test_double_shift() {
        assert_eq!(classify(&["08:00:00", "23:10:00"]), ShiftType::Double);
        assert_eq!(classify(&["13:59:00", "22:00:00"]), ShiftType::Double);
    }

    #[test]
    fn test_double_takes_precedence_over_morning() {
        // Morning-hour arrival, but the 22:00 departure makes it double.
        assert_eq!(classify(&["09:30:00", "22:05:00"]), ShiftType::Double);
    }

    #[test]
    fn test_morning_shift_window() {
        assert_eq!(classify(&["09:00:00", "13:50:00"]), ShiftType::Morning);
        assert_eq!(classify(&["13:59:00", "17:00:00"]), ShiftType::Morning);
    }

    #[test]
    fn test_evening_shift() {
        assert_eq!(classify(&["14:00:00", "21:00:00"]), ShiftType::Evening);
        assert_eq!(classify(&["18:30:00", "21:45:00"]), ShiftType::Evening);
    }

    #[test]
    fn test_arrival_at_14_is_evening_not_morning() {
        assert_eq!(classify(&["14:00:00", "18:00:00"]), ShiftType::Evening);
    }

    #[test]
    fn test_early_arrival_short_day_is_unclassified() {
        assert_eq!(classify(&["07:00:00", "08:30:00"]), ShiftType::Unclassified);
        assert_eq!(classify(&["05:00:00", "21:59:00"]), ShiftType::Unclassified);
    }

    #[test]
    fn test_early_arrival_with_late_departure_is_double_not_unclassified() {
        assert_eq!(classify(&["07:00:00", "22:00:00"]), ShiftType::Double);
    }
}
