//! Per-employee summarization.
//!
//! This is the orchestrating pass: it derives the global reporting period,
//! partitions punches by employee and calendar day, applies the shift,
//! delay, late-departure, and absence rules, and emits one
//! [`EmployeeSummary`] per distinct employee name.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::config::AttendancePolicy;
use crate::models::{
    AbsenceDetail, DayPunches, DelayDetail, DoubleShiftDetail, EmployeeSummary,
    LateDepartureDetail, MorningShiftDetail, PunchRecord, ReportingPeriod, ShiftType,
};

use super::absence::{compute_absent_days, weekday_name};
use super::delays::detect_delays;
use super::departures::is_late_departure;
use super::overtime::calculate_overtime;
use super::shift_rules::classify_shift;

/// Formats a punch time in the report's 12-hour form (e.g. `03:20 PM`).
pub fn format_time_12h(datetime: NaiveDateTime) -> String {
    datetime.format("%I:%M %p").to_string()
}

/// Formats a worked span as `H:MM:SS` (e.g. `15:10:00`), matching the
/// double-shift duration column of the report.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();
    format!(
        "{}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}

/// Builds one attendance summary per distinct employee name.
///
/// Employees appear in first-appearance order of the input (stable
/// grouping); each employee's days are processed in ascending date order.
/// An empty punch set yields an empty summary list, which callers must
/// treat as "nothing to report" rather than a failure.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::summarize_attendance;
/// use attendance_engine::config::AttendancePolicy;
/// use attendance_engine::models::{PunchRecord, ShiftType};
/// use chrono::NaiveDateTime;
///
/// let punch = |t: &str| PunchRecord {
///     employee_name: "Ali".to_string(),
///     timestamp: NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// let punches = vec![punch("2024-01-10 09:05:00"), punch("2024-01-10 13:50:00")];
///
/// let summaries = summarize_attendance(&punches, &AttendancePolicy::default());
/// assert_eq!(summaries.len(), 1);
/// assert_eq!(summaries[0].total_shift_units, 1);
/// assert!(summaries[0].shift_types_seen.contains(&ShiftType::Morning));
/// ```
pub fn summarize_attendance(
    punches: &[PunchRecord],
    policy: &AttendancePolicy,
) -> Vec<EmployeeSummary> {
    let Some(period) = ReportingPeriod::from_punches(punches) else {
        return Vec::new();
    };

    // Group by employee name in first-appearance order, then by calendar
    // day in ascending order.
    let mut order: Vec<String> = Vec::new();
    let mut by_employee: HashMap<String, BTreeMap<NaiveDate, Vec<NaiveDateTime>>> = HashMap::new();
    for punch in punches {
        if !by_employee.contains_key(&punch.employee_name) {
            order.push(punch.employee_name.clone());
        }
        by_employee
            .entry(punch.employee_name.clone())
            .or_default()
            .entry(punch.date())
            .or_default()
            .push(punch.timestamp);
    }

    order
        .into_iter()
        .filter_map(|name| {
            let days = by_employee.remove(&name)?;
            Some(summarize_employee(name, days, &period, policy))
        })
        .collect()
}

/// Builds the summary for a single employee from their day-partitioned
/// punches.
fn summarize_employee(
    name: String,
    days: BTreeMap<NaiveDate, Vec<NaiveDateTime>>,
    period: &ReportingPeriod,
    policy: &AttendancePolicy,
) -> EmployeeSummary {
    let mut total_shift_units = 0u32;
    let mut shift_types_seen = BTreeSet::new();
    let mut delay_details = Vec::new();
    let mut morning_details = Vec::new();
    let mut late_departure_details = Vec::new();
    let mut double_shift_details = Vec::new();
    let mut attended = HashSet::new();

    for (date, punches) in days {
        let Some(day) = DayPunches::new(date, punches) else {
            continue;
        };
        attended.insert(date);

        let arrival = day.arrival();
        let departure = day.departure();

        let shift_type = classify_shift(&day, &policy.shift_hours);
        total_shift_units += shift_type.units();
        shift_types_seen.insert(shift_type);

        match shift_type {
            ShiftType::Double => double_shift_details.push(DoubleShiftDetail {
                date,
                arrival: format_time_12h(arrival),
                departure: format_time_12h(departure),
                duration: format_duration(departure - arrival),
            }),
            ShiftType::Morning => morning_details.push(MorningShiftDetail {
                date,
                arrival: format_time_12h(arrival),
                departure: format_time_12h(departure),
            }),
            _ => {}
        }

        for delayed in detect_delays(day.punches(), &policy.delay) {
            delay_details.push(DelayDetail {
                date,
                time: format_time_12h(delayed),
            });
        }

        if is_late_departure(departure, &policy.late_departure) {
            late_departure_details.push(LateDepartureDetail {
                date,
                departure: format_time_12h(departure),
            });
        }
    }

    let absent_days = compute_absent_days(period, &attended);
    let absence_details = absent_days
        .iter()
        .map(|&date| AbsenceDetail {
            date,
            weekday: weekday_name(date),
        })
        .collect();
    let overtime_units = calculate_overtime(total_shift_units, policy.overtime_threshold_units);
    let delay_count = delay_details.len() as u32;

    EmployeeSummary {
        name,
        total_shift_units,
        shift_types_seen,
        delay_count,
        delay_details,
        absent_days,
        absence_details,
        overtime_units,
        morning_details,
        late_departure_details,
        double_shift_details,
    }
}
