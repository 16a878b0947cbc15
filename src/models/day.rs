//! One employee's punches for one calendar day.

use chrono::{NaiveDate, NaiveDateTime};

/// The set of punches one employee made on one calendar date.
///
/// Derived during classification, never stored. Punches are held sorted
/// ascending, so arrival is the first element and departure the last
/// (equal when the day has a single punch).
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayPunches;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let punches = vec![
///     NaiveDateTime::parse_from_str("2024-01-10 13:50:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2024-01-10 09:05:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ];
/// let day = DayPunches::new(date, punches).unwrap();
/// assert_eq!(day.arrival().time().to_string(), "09:05:00");
/// assert_eq!(day.departure().time().to_string(), "13:50:00");
/// assert!(!day.is_single_punch());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPunches {
    date: NaiveDate,
    punches: Vec<NaiveDateTime>,
}

impl DayPunches {
    /// Creates a day group from a date and its punches.
    ///
    /// Returns `None` for an empty punch list; day groups only exist for
    /// attended days. The punches are sorted ascending on construction.
    pub fn new(date: NaiveDate, mut punches: Vec<NaiveDateTime>) -> Option<Self> {
        if punches.is_empty() {
            return None;
        }
        punches.sort();
        Some(Self { date, punches })
    }

    /// Returns the calendar date of this group.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns all punches for the day, ascending.
    pub fn punches(&self) -> &[NaiveDateTime] {
        &self.punches
    }

    /// Returns the earliest punch of the day.
    pub fn arrival(&self) -> NaiveDateTime {
        // Constructor guarantees at least one punch.
        self.punches[0]
    }

    /// Returns the latest punch of the day.
    pub fn departure(&self) -> NaiveDateTime {
        self.punches[self.punches.len() - 1]
    }

    /// Returns true when the day has exactly one punch.
    pub fn is_single_punch(&self) -> bool {
        self.punches.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_punch_list_yields_no_group() {
        assert!(DayPunches::new(make_date("2024-01-10"), vec![]).is_none());
    }

    #[test]
    fn test_arrival_and_departure_from_unsorted_input() {
        let day = DayPunches::new(
            make_date("2024-01-10"),
            vec![
                make_datetime("2024-01-10 13:50:00"),
                make_datetime("2024-01-10 09:05:00"),
                make_datetime("2024-01-10 12:00:00"),
            ],
        )
        .unwrap();
        assert_eq!(day.arrival(), make_datetime("2024-01-10 09:05:00"));
        assert_eq!(day.departure(), make_datetime("2024-01-10 13:50:00"));
        assert!(!day.is_single_punch());
    }

    #[test]
    fn test_single_punch_arrival_equals_departure() {
        let day = DayPunches::new(
            make_date("2024-01-12"),
            vec![make_datetime("2024-01-12 15:20:00")],
        )
        .unwrap();
        assert!(day.is_single_punch());
        assert_eq!(day.arrival(), day.departure());
    }
}
