//! The fixed Arabic label set of the rendered report.
//!
//! These strings are part of the output contract with the report
//! renderer: a reimplementation must reproduce them verbatim for the
//! generated document to match the original report format.

/// Title of the rendered attendance report document.
pub const REPORT_TITLE: &str = "تقرير الحضور والانصراف العام";

/// Per-employee heading prefix ("employee data").
pub const EMPLOYEE_HEADING: &str = "بيانات الموظف";

/// Extracted-table column name for the badge id.
pub const COLUMN_BADGE_ID: &str = "رقم البصمه";

/// Extracted-table column name for the employee name.
pub const COLUMN_NAME: &str = "الإسم";

/// Extracted-table column name for the raw timestamp.
pub const COLUMN_TIMESTAMP: &str = "التاريخ_الوقت";

/// Summary-line label for the total shift count.
pub const LABEL_TOTAL_SHIFTS: &str = "إجمالي الورديات";

/// Summary-line label for the shift types seen.
pub const LABEL_SHIFT_TYPES: &str = "أنواعها";

/// Summary-line label for the delay count.
pub const LABEL_DELAYS: &str = "تأخيرات";

/// Summary-line label for the absence count.
pub const LABEL_ABSENCES: &str = "غياب";

/// Summary-line label for the overtime figure.
pub const LABEL_OVERTIME: &str = "الدوام الإضافي";

/// Unit word appended to the overtime figure ("shift").
pub const LABEL_SHIFT_UNIT: &str = "وردية";

/// Rendered when the employee has no classified shifts at all.
pub const NO_SHIFTS: &str = "لا توجد ورديات";

/// Section heading for the double-shift detail table.
pub const SECTION_DOUBLE_SHIFTS: &str = "تفاصيل الورديات المزدوجة";

/// Section heading for the morning-shift detail table.
pub const SECTION_MORNING_SHIFTS: &str = "الورديات الصباحية";

/// Section heading for the delay detail table.
pub const SECTION_DELAYS: &str = "تفاصيل التأخيرات";

/// Section heading for the late-departure detail table.
pub const SECTION_LATE_DEPARTURES: &str = "الخروج المتأخر";

/// Section heading for the absence detail table.
pub const SECTION_ABSENCES: &str = "تفاصيل أيام الغياب";

/// Detail-table column header for dates.
pub const HEADER_DATE: &str = "التاريخ";

/// Detail-table column header for arrival times.
pub const HEADER_ARRIVAL: &str = "الحضور";

/// Detail-table column header for departure times.
pub const HEADER_DEPARTURE: &str = "الانصراف";

/// Detail-table column header for the double-shift duration.
pub const HEADER_DURATION: &str = "المدة";

/// Detail-table column header for delayed punch times.
pub const HEADER_DELAY_TIME: &str = "وقت التأخير";

/// Detail-table column header for late exit times.
pub const HEADER_EXIT_TIME: &str = "وقت الخروج";

/// Column header of the absence table (date with weekday).
pub const HEADER_DATE_WITH_DAY: &str = "التاريخ (اليوم)";
