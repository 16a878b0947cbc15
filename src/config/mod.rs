//! Configuration for the Attendance Classification Engine.
//!
//! This module provides the attendance policy (shift hour boundaries, the
//! delay window, the late-departure boundary, and the overtime threshold)
//! plus a YAML loader for overriding the built-in values.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("Overtime threshold: {}", loader.policy().overtime_threshold_units);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{AttendancePolicy, DelayWindow, LateDepartureRule, ShiftHours};
