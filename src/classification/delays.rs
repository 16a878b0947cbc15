//! Delayed punch detection.
//!
//! A delay is any punch falling inside the configured late-arrival/return
//! window. The rule deliberately fires on every punch at those times, not
//! just the day's first: an employee returning from a break inside the
//! window also counts.

use chrono::{NaiveDateTime, Timelike};

use crate::config::DelayWindow;

/// Returns true when a single punch falls inside the delay window.
///
/// With the default window a punch counts when its clock time is at
/// hour 15 with minute > 10, or anywhere inside hour 16.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::is_delayed_punch;
/// use attendance_engine::config::DelayWindow;
/// use chrono::NaiveDateTime;
///
/// let window = DelayWindow::default();
/// let punch = NaiveDateTime::parse_from_str("2024-01-12 15:20:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_delayed_punch(punch, &window));
/// ```
pub fn is_delayed_punch(punch: NaiveDateTime, window: &DelayWindow) -> bool {
    let hour = punch.hour();
    let minute = punch.minute();
    (hour == window.boundary_hour && minute > window.boundary_minute) || hour == window.full_hour
}

/// Collects the delayed punches from one day's punch list, in input order.
pub fn detect_delays(punches: &[NaiveDateTime], window: &DelayWindow) -> Vec<NaiveDateTime> {
    punches
        .iter()
        .copied()
        .filter(|p| is_delayed_punch(*p, window))
        .collect()
}
