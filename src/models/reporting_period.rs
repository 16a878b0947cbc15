//! Reporting period model.
//!
//! The reporting period is the full inclusive date range spanned by the
//! earliest and latest punch across the *entire* input file. Every
//! employee's absence calendar is computed against this one shared window,
//! not against their individual first/last punch.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::PunchRecord;

/// The inclusive global date window for one analysis run.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportingPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
/// };
/// assert_eq!(period.num_days(), 30);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// The earliest punch date in the file (inclusive).
    pub start_date: NaiveDate,
    /// The latest punch date in the file (inclusive).
    pub end_date: NaiveDate,
}

impl ReportingPeriod {
    /// Derives the period from the full normalized punch set.
    ///
    /// Returns `None` for an empty punch set: with no valid punches there
    /// is nothing to report and no window to measure absence against.
    pub fn from_punches(punches: &[PunchRecord]) -> Option<Self> {
        let start_date = punches.iter().map(PunchRecord::date).min()?;
        let end_date = punches.iter().map(PunchRecord::date).max()?;
        Some(Self {
            start_date,
            end_date,
        })
    }

    /// Checks whether a date falls inside the period (inclusive on both ends).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days in the period, inclusive.
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Iterates every date in the period in ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::ReportingPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = ReportingPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
    /// };
    /// let dates: Vec<_> = period.iter_dates().collect();
    /// assert_eq!(dates.len(), 3);
    /// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    /// ```
    pub fn iter_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let start = self.start_date;
        (0..self.num_days() as u64).filter_map(move |offset| start.checked_add_days(Days::new(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn punch(name: &str, s: &str) -> PunchRecord {
        PunchRecord {
            employee_name: name.to_string(),
            timestamp: NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap(),
        }
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_from_punches_empty_is_none() {
        assert!(ReportingPeriod::from_punches(&[]).is_none());
    }

    #[test]
    fn test_from_punches_spans_all_employees() {
        let punches = vec![
            punch("Ali", "2024-01-10 09:00:00"),
            punch("Sara", "2024-01-05 08:00:00"),
            punch("Ali", "2024-01-20 17:00:00"),
        ];
        let period = ReportingPeriod::from_punches(&punches).unwrap();
        assert_eq!(period.start_date, make_date("2024-01-05"));
        assert_eq!(period.end_date, make_date("2024-01-20"));
        assert_eq!(period.num_days(), 16);
    }

    #[test]
    fn test_single_day_period() {
        let punches = vec![punch("Omar", "2024-01-12 15:20:00")];
        let period = ReportingPeriod::from_punches(&punches).unwrap();
        assert_eq!(period.start_date, period.end_date);
        assert_eq!(period.num_days(), 1);
        assert_eq!(period.iter_dates().count(), 1);
    }

    #[test]
    fn test_iter_dates_is_inclusive_and_ascending() {
        let period = ReportingPeriod {
            start_date: make_date("2024-01-28"),
            end_date: make_date("2024-02-02"),
        };
        let dates: Vec<_> = period.iter_dates().collect();
        assert_eq!(dates.first().copied(), Some(make_date("2024-01-28")));
        assert_eq!(dates.last().copied(), Some(make_date("2024-02-02")));
        assert_eq!(dates.len(), 6);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}
