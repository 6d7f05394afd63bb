//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{AttendanceError, AttendanceResult};
use crate::models::WorkLocation;

use super::types::{AttendanceConfig, AttendancePolicy, WorkLocationsConfig};

/// Loads and provides access to attendance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/daycare/
/// ├── policy.yaml          # Day window, cutoffs, overtime units, fence radius
/// └── work_locations.yaml  # Registered work locations
/// ```
///
/// # Example
///
/// ```no_run
/// use daycare_attendance::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/daycare").unwrap();
/// println!("{} work locations", loader.work_locations().len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> AttendanceResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<AttendancePolicy>(&policy_path)?;
        policy
            .validate()
            .map_err(|message| AttendanceError::ConfigParseError {
                path: policy_path.display().to_string(),
                message,
            })?;

        let locations_path = path.join("work_locations.yaml");
        let locations = Self::load_yaml::<WorkLocationsConfig>(&locations_path)?;
        locations
            .validate()
            .map_err(|message| AttendanceError::ConfigParseError {
                path: locations_path.display().to_string(),
                message,
            })?;

        Ok(Self {
            config: AttendanceConfig::new(policy, locations.work_locations),
        })
    }

    /// Builds a loader from already-constructed parts.
    pub fn from_parts(policy: AttendancePolicy, work_locations: Vec<WorkLocation>) -> Self {
        Self {
            config: AttendanceConfig::new(policy, work_locations),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AttendanceResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AttendanceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AttendanceError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the attendance policy.
    pub fn policy(&self) -> &AttendancePolicy {
        self.config.policy()
    }

    /// Returns the configured work locations.
    pub fn work_locations(&self) -> &[WorkLocation] {
        self.config.work_locations()
    }
}
