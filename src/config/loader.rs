//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading an
//! [`AttendancePolicy`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AttendancePolicy;

/// Loads and provides access to the attendance policy.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
/// assert_eq!(loader.policy().overtime_threshold_units, 26);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: AttendancePolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/policy.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if the file is
    /// missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { policy })
    }

    /// Builds a loader around the built-in default policy.
    pub fn with_defaults() -> Self {
        Self {
            policy: AttendancePolicy::default(),
        }
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }
}
