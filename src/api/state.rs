//! Application state for the Attendance Classification Engine API.

use std::sync::Arc;

use crate::config::AttendancePolicy;

/// Shared application state.
///
/// Holds the attendance policy shared across request handlers. The policy
/// is read-only after startup; per-request analyses run independently.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<AttendancePolicy>,
}

impl AppState {
    /// Creates a new application state with the given policy.
    pub fn new(policy: AttendancePolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the attendance policy.
    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_exposes_policy() {
        let state = AppState::new(AttendancePolicy::default());
        assert_eq!(state.policy().overtime_threshold_units, 26);
    }
}
