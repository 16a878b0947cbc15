//! Report-facing output helpers.
//!
//! Document rendering itself belongs to an external collaborator; this
//! module carries the label contract it depends on and the small pieces
//! of formatted text the engine owns: the joined shift-type list and the
//! one-line Arabic summary per employee.

pub mod labels;

use crate::models::EmployeeSummary;

/// Joins the distinct shift-type labels for the summary line, or the
/// fixed fallback when the employee has no classified shifts.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::summarize_attendance;
/// use attendance_engine::config::AttendancePolicy;
/// use attendance_engine::models::PunchRecord;
/// use attendance_engine::report::shift_types_label;
/// use chrono::NaiveDateTime;
///
/// let punch = PunchRecord {
///     employee_name: "Omar".to_string(),
///     timestamp: NaiveDateTime::parse_from_str("2024-01-12 15:20:00", "%Y-%m-%d %H:%M:%S")
///         .unwrap(),
/// };
/// let summaries = summarize_attendance(&[punch], &AttendancePolicy::default());
/// assert_eq!(shift_types_label(&summaries[0]), "بصمة واحدة");
/// ```
pub fn shift_types_label(summary: &EmployeeSummary) -> String {
    if summary.shift_types_seen.is_empty() {
        return labels::NO_SHIFTS.to_string();
    }
    summary
        .shift_types_seen
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the one-line Arabic summary for an employee, as placed under
/// the employee heading in the rendered document.
pub fn summary_line(summary: &EmployeeSummary) -> String {
    format!(
        "{}: {}, {}: {}, {}: {}, {}: {}, {}: {} {}",
        labels::LABEL_TOTAL_SHIFTS,
        summary.total_shift_units,
        labels::LABEL_SHIFT_TYPES,
        shift_types_label(summary),
        labels::LABEL_DELAYS,
        summary.delay_count,
        labels::LABEL_ABSENCES,
        summary.absent_day_count(),
        labels::LABEL_OVERTIME,
        summary.overtime_units,
        labels::LABEL_SHIFT_UNIT,
    )
}

/// Formats one absent day as rendered in the absence table, e.g.
/// `2024-01-13 (Saturday)`.
pub fn format_absent_day(detail: &crate::models::AbsenceDetail) -> String {
    format!("{} ({})", detail.date.format("%Y-%m-%d"), detail.weekday)
}
