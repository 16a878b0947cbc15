//! Attendance Classification Engine
//!
//! This crate turns raw time-clock punch rows (as extracted from a PDF
//! attendance export) into per-employee attendance summaries: a shift
//! classification for each attended day, delay and late-departure detail
//! lists, the absence calendar for the reporting period, and overtime
//! against the standard shift quota.

#![warn(missing_docs)]

pub mod api;
pub mod classification;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod report;
