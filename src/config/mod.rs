//! Configuration loading and management for the attendance engine.
//!
//! This module loads the attendance policy (day window, cutoffs, overtime
//! units, fence radius) and the registered work locations from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use daycare_attendance::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/daycare").unwrap();
//! println!("Day starts at {}", config.policy().teacher.day_start);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceConfig, AttendancePolicy, ChildPolicy, GeofencePolicy, TeacherPolicy,
    WorkLocationsConfig,
};
