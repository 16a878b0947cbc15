//! Classification logic for the Attendance Classification Engine.
//!
//! This module contains the attendance rules: shift classification per
//! employee-day, delayed punch detection, late departure detection,
//! absence calendar computation against the global reporting period,
//! overtime against the shift quota, and the per-employee summarization
//! that ties them together.

mod absence;
mod delays;
mod departures;
mod overtime;
mod shift_rules;
mod summarize;

pub use absence::{compute_absent_days, weekday_name};
pub use delays::{detect_delays, is_delayed_punch};
pub use departures::is_late_departure;
pub use overtime::{DEFAULT_OVERTIME_THRESHOLD_UNITS, calculate_overtime};
pub use shift_rules::classify_shift;
pub use summarize::{format_duration, format_time_12h, summarize_attendance};
