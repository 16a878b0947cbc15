//! Absence calendar computation.
//!
//! Absence is measured against the *global* reporting period, not the
//! employee's own first and last punch: an employee who appears for one
//! day out of a 30-day file window is absent for the other 29.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::ReportingPeriod;

/// Computes the absent dates for one employee, ascending.
///
/// An absent date is any date in the inclusive global period on which the
/// employee had no punch at all. Days whose shift is unclassified still
/// count as attended.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::compute_absent_days;
/// use attendance_engine::models::ReportingPeriod;
/// use chrono::NaiveDate;
/// use std::collections::HashSet;
///
/// let period = ReportingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
/// };
/// let attended: HashSet<_> = [NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()].into();
///
/// let absent = compute_absent_days(&period, &attended);
/// assert_eq!(absent.len(), 3);
/// ```
pub fn compute_absent_days(
    period: &ReportingPeriod,
    attended: &HashSet<NaiveDate>,
) -> Vec<NaiveDate> {
    period
        .iter_dates()
        .filter(|date| !attended.contains(date))
        .collect()
}

/// Returns the full English weekday name for a date, as rendered next to
/// each absent day in the report (e.g. `Monday`).
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
