//! Overtime calculation against the standard shift quota.

/// Default shift units an employee can accrue before overtime starts.
///
/// Represents the standard full-period shift quota of the source report.
pub const DEFAULT_OVERTIME_THRESHOLD_UNITS: u32 = 26;

/// Calculates overtime units from the accumulated shift unit total.
///
/// Overtime is the excess over the threshold, never negative.
///
/// # Examples
///
/// ```
/// use attendance_engine::classification::{
///     DEFAULT_OVERTIME_THRESHOLD_UNITS, calculate_overtime,
/// };
///
/// assert_eq!(calculate_overtime(30, DEFAULT_OVERTIME_THRESHOLD_UNITS), 4);
/// assert_eq!(calculate_overtime(26, DEFAULT_OVERTIME_THRESHOLD_UNITS), 0);
/// assert_eq!(calculate_overtime(10, DEFAULT_OVERTIME_THRESHOLD_UNITS), 0);
/// ```
pub fn calculate_overtime(total_shift_units: u32, threshold: u32) -> u32 {
    total_shift_units.saturating_sub(threshold)
}
