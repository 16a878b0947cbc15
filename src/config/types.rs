//! Attendance policy types.
//!
//! The source report tooling kept these values as module-level literals.
//! Here they are explicit configuration, deserializable from YAML, with
//! `Default` providing the built-in policy.

use serde::Deserialize;

/// Hour boundaries for shift classification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShiftHours {
    /// First hour counted as a morning arrival (inclusive).
    pub morning_start: u32,
    /// Hour at which an arrival stops being morning and becomes evening
    /// (exclusive upper bound of the morning window).
    pub evening_start: u32,
    /// Earliest departure hour that can complete a double shift.
    pub double_departure_start: u32,
}

impl Default for ShiftHours {
    fn default() -> Self {
        Self {
            morning_start: 9,
            evening_start: 14,
            double_departure_start: 22,
        }
    }
}

/// The late-arrival/return window. A punch is a delay when it falls after
/// `boundary_minute` within `boundary_hour`, or anywhere inside
/// `full_hour`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DelayWindow {
    /// Hour in which only minutes past the boundary count (15 means the
    /// window opens at 15:11).
    pub boundary_hour: u32,
    /// Last on-time minute within the boundary hour.
    pub boundary_minute: u32,
    /// Hour treated as delayed for every minute.
    pub full_hour: u32,
}

impl Default for DelayWindow {
    fn default() -> Self {
        Self {
            boundary_hour: 15,
            boundary_minute: 10,
            full_hour: 16,
        }
    }
}

/// The late-departure boundary: a departure strictly after `hour`, or at
/// `hour` with minute at or past `minute`, is recorded as a late exit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LateDepartureRule {
    /// Boundary hour.
    pub hour: u32,
    /// First late minute within the boundary hour.
    pub minute: u32,
}

impl Default for LateDepartureRule {
    fn default() -> Self {
        Self { hour: 22, minute: 20 }
    }
}

/// The complete attendance policy for one analysis run.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendancePolicy;
///
/// let policy = AttendancePolicy::default();
/// assert_eq!(policy.shift_hours.morning_start, 9);
/// assert_eq!(policy.overtime_threshold_units, 26);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttendancePolicy {
    /// Shift classification hour boundaries.
    #[serde(default)]
    pub shift_hours: ShiftHours,
    /// The late-arrival/return window.
    #[serde(default)]
    pub delay: DelayWindow,
    /// The late-departure boundary.
    #[serde(default)]
    pub late_departure: LateDepartureRule,
    /// Shift units an employee can accrue before overtime starts. The
    /// default of 26 is the standard full-period shift quota.
    #[serde(default = "default_overtime_threshold")]
    pub overtime_threshold_units: u32,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            shift_hours: ShiftHours::default(),
            delay: DelayWindow::default(),
            late_departure: LateDepartureRule::default(),
            overtime_threshold_units: default_overtime_threshold(),
        }
    }
}

fn default_overtime_threshold() -> u32 {
    26
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_values() {
        let policy = AttendancePolicy::default();
        assert_eq!(policy.shift_hours.evening_start, 14);
        assert_eq!(policy.shift_hours.double_departure_start, 22);
        assert_eq!(policy.delay.boundary_hour, 15);
        assert_eq!(policy.delay.boundary_minute, 10);
        assert_eq!(policy.delay.full_hour, 16);
        assert_eq!(policy.late_departure.hour, 22);
        assert_eq!(policy.late_departure.minute, 20);
    }

    #[test]
    fn test_default_overtime_threshold() {
        assert_eq!(AttendancePolicy::default().overtime_threshold_units, 26);
    }

    #[test]
    fn test_deserialize_partial_yaml_fills_defaults() {
        let policy: AttendancePolicy =
            serde_yaml::from_str("overtime_threshold_units: 30\n").unwrap();
        assert_eq!(policy.overtime_threshold_units, 30);
        assert_eq!(policy.shift_hours, ShiftHours::default());
    }

    #[test]
    fn test_deserialize_full_yaml() {
        let yaml = r#"
shift_hours:
  morning_start: 8
  evening_start: 13
  double_departure_start: 21
delay:
  boundary_hour: 14
  boundary_minute: 5
  full_hour: 15
late_departure:
  hour: 21
  minute: 30
overtime_threshold_units: 20
"#;
        let policy: AttendancePolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.shift_hours.morning_start, 8);
        assert_eq!(policy.delay.full_hour, 15);
        assert_eq!(policy.late_departure.minute, 30);
        assert_eq!(policy.overtime_threshold_units, 20);
    }
}
