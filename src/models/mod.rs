//! Core data models for the Attendance Classification Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day;
mod punch;
mod reporting_period;
mod shift_type;
mod summary;

pub use day::DayPunches;
pub use punch::{PunchRecord, RawPunchRow};
pub use reporting_period::ReportingPeriod;
pub use shift_type::ShiftType;
pub use summary::{
    AbsenceDetail, DelayDetail, DoubleShiftDetail, EmployeeSummary, LateDepartureDetail,
    MorningShiftDetail,
};
