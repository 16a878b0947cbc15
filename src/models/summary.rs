//! Per-employee attendance summary and its detail rows.
//!
//! One [`EmployeeSummary`] is built per distinct employee name in the
//! input and is immutable after construction; the report renderer is its
//! only consumer. Times inside detail rows are pre-formatted 12-hour
//! strings because they are part of the rendered report contract.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ShiftType;

/// One delayed punch: a punch that fell inside the late-arrival window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayDetail {
    /// The day the delayed punch occurred.
    pub date: NaiveDate,
    /// The punch time, 12-hour formatted (e.g. `03:20 PM`).
    pub time: String,
}

/// One morning shift day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorningShiftDetail {
    /// The shift date.
    pub date: NaiveDate,
    /// Arrival time, 12-hour formatted.
    pub arrival: String,
    /// Departure time, 12-hour formatted.
    pub departure: String,
}

/// One double shift day, including the worked span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleShiftDetail {
    /// The shift date.
    pub date: NaiveDate,
    /// Arrival time, 12-hour formatted.
    pub arrival: String,
    /// Departure time, 12-hour formatted.
    pub departure: String,
    /// Departure minus arrival, formatted `H:MM:SS`.
    pub duration: String,
}

/// One late departure: the day's last punch fell past the exit boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateDepartureDetail {
    /// The day of the late departure.
    pub date: NaiveDate,
    /// Departure time, 12-hour formatted.
    pub departure: String,
}

/// One absent day paired with its weekday name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceDetail {
    /// The absent date.
    pub date: NaiveDate,
    /// The English weekday name (e.g. `Monday`), as rendered in the report.
    pub weekday: String,
}

/// The full attendance summary for one employee over the reporting period.
///
/// Built once per run by [`crate::classification::summarize_attendance`]
/// and consumed by the report renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee display name (the grouping key).
    pub name: String,
    /// Weighted shift count: 1 per single/morning/evening day, 2 per
    /// double day, 0 per unclassified day.
    pub total_shift_units: u32,
    /// The distinct shift types encountered across the employee's days,
    /// in stable precedence order.
    pub shift_types_seen: BTreeSet<ShiftType>,
    /// Total number of delayed punches across all days.
    pub delay_count: u32,
    /// Every delayed punch, in day order.
    pub delay_details: Vec<DelayDetail>,
    /// Dates inside the global reporting period with no punch, ascending.
    pub absent_days: Vec<NaiveDate>,
    /// The absent dates paired with weekday names, same order.
    pub absence_details: Vec<AbsenceDetail>,
    /// Shift units beyond the standard full-period quota.
    pub overtime_units: u32,
    /// Every morning shift day, in date order.
    pub morning_details: Vec<MorningShiftDetail>,
    /// Every late departure, in date order.
    pub late_departure_details: Vec<LateDepartureDetail>,
    /// Every double shift day, in date order.
    pub double_shift_details: Vec<DoubleShiftDetail>,
}

impl EmployeeSummary {
    /// Returns the number of absent days.
    pub fn absent_day_count(&self) -> usize {
        self.absent_days.len()
    }
}
