//! Shift type classification labels.

use serde::{Deserialize, Serialize};

/// The shift category assigned to one employee-day.
///
/// Exactly one variant applies per day, chosen by fixed precedence in
/// [`crate::classification::classify_shift`]. The declaration order here
/// mirrors that precedence and gives the derived `Ord` a stable, policy
/// meaningful ordering for rendered label sets.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ShiftType;
///
/// assert_eq!(ShiftType::Double.units(), 2);
/// assert_eq!(ShiftType::Morning.label(), "صباحية");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Exactly one punch recorded that day. Overrides every other rule.
    SinglePunch,
    /// Arrival before 14:00 and departure at or after 22:00.
    Double,
    /// Arrival between 09:00 (inclusive) and 14:00 (exclusive).
    Morning,
    /// Arrival at or after 14:00.
    Evening,
    /// No rule matched (multi-punch day arriving before 09:00 and
    /// leaving before 22:00). Still counts as attended.
    Unclassified,
}

impl ShiftType {
    /// Returns the shift units this classification contributes to the
    /// employee's running total.
    pub fn units(&self) -> u32 {
        match self {
            ShiftType::SinglePunch | ShiftType::Morning | ShiftType::Evening => 1,
            ShiftType::Double => 2,
            ShiftType::Unclassified => 0,
        }
    }

    /// Returns the Arabic report label for this shift type.
    ///
    /// These labels are part of the output contract with the report
    /// renderer and must be reproduced verbatim.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftType::SinglePunch => "بصمة واحدة",
            ShiftType::Double => "مزدوجة",
            ShiftType::Morning => "صباحية",
            ShiftType::Evening => "مسائية",
            ShiftType::Unclassified => "غير معروف",
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
