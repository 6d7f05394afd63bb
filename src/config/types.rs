//! Configuration types for attendance rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every field has a default
//! so a partial file only overrides what it names.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_CHILD_EVENING_CUTOFF, DEFAULT_CHILD_MORNING_CUTOFF,
    DEFAULT_CHILD_OVERTIME_UNIT_MINUTES, DEFAULT_DAY_END, DEFAULT_DAY_START,
    DEFAULT_FENCE_TOLERANCE_KM, DEFAULT_OVERTIME_CAP_MINUTES, WorkHoursResult,
    calculate_child_evening_overtime, calculate_child_morning_overtime,
    calculate_evening_overtime, calculate_morning_overtime, calculate_work_hours,
};
use crate::models::{GeoPoint, WorkLocation};

/// Rules for teacher sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeacherPolicy {
    /// Start of the regular day; earlier clock-ins count as morning overtime.
    pub day_start: NaiveTime,
    /// End of the regular day; later clock-outs count as evening overtime.
    pub day_end: NaiveTime,
    /// Upper bound for morning and evening overtime, in minutes.
    pub overtime_cap_minutes: i64,
}

impl Default for TeacherPolicy {
    fn default() -> Self {
        Self {
            day_start: DEFAULT_DAY_START,
            day_end: DEFAULT_DAY_END,
            overtime_cap_minutes: DEFAULT_OVERTIME_CAP_MINUTES,
        }
    }
}

/// Rules for child attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildPolicy {
    /// Arrivals strictly before this time accrue morning overtime.
    pub morning_cutoff: NaiveTime,
    /// Departures strictly after this time accrue evening overtime.
    pub evening_cutoff: NaiveTime,
    /// Length of one billable overtime unit, in minutes.
    pub overtime_unit_minutes: i64,
}

impl Default for ChildPolicy {
    fn default() -> Self {
        Self {
            morning_cutoff: DEFAULT_CHILD_MORNING_CUTOFF,
            evening_cutoff: DEFAULT_CHILD_EVENING_CUTOFF,
            overtime_unit_minutes: DEFAULT_CHILD_OVERTIME_UNIT_MINUTES,
        }
    }
}

/// Geofence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeofencePolicy {
    /// Fence radius around every work location, in kilometres.
    pub tolerance_km: f64,
}

impl Default for GeofencePolicy {
    fn default() -> Self {
        Self {
            tolerance_km: DEFAULT_FENCE_TOLERANCE_KM,
        }
    }
}

/// The complete attendance policy (`policy.yaml`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendancePolicy {
    /// Teacher rules.
    pub teacher: TeacherPolicy,
    /// Child rules.
    pub child: ChildPolicy,
    /// Geofence rules.
    pub geofence: GeofencePolicy,
}

impl AttendancePolicy {
    /// Checks that the policy is internally consistent.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.teacher.day_start >= self.teacher.day_end {
            return Err(format!(
                "teacher.day_start ({}) must be before teacher.day_end ({})",
                self.teacher.day_start, self.teacher.day_end
            ));
        }
        if self.teacher.overtime_cap_minutes <= 0 {
            return Err("teacher.overtime_cap_minutes must be positive".to_string());
        }
        if self.child.morning_cutoff >= self.child.evening_cutoff {
            return Err(format!(
                "child.morning_cutoff ({}) must be before child.evening_cutoff ({})",
                self.child.morning_cutoff, self.child.evening_cutoff
            ));
        }
        if self.child.overtime_unit_minutes <= 0 {
            return Err("child.overtime_unit_minutes must be positive".to_string());
        }
        if !self.geofence.tolerance_km.is_finite() || self.geofence.tolerance_km <= 0.0 {
            return Err("geofence.tolerance_km must be a positive number".to_string());
        }
        Ok(())
    }

    /// Morning overtime minutes for a clock-in at `now`, or 0 if not requested.
    pub fn morning_overtime(&self, now: NaiveDateTime, requested: bool) -> i64 {
        if !requested {
            return 0;
        }
        calculate_morning_overtime(now, self.teacher.day_start, self.teacher.overtime_cap_minutes)
    }

    /// Evening overtime minutes for a clock-out at `now`, or 0 if not requested.
    pub fn evening_overtime(&self, now: NaiveDateTime, requested: bool) -> i64 {
        if !requested {
            return 0;
        }
        calculate_evening_overtime(now, self.teacher.day_end, self.teacher.overtime_cap_minutes)
    }

    /// Work hours inside the teacher day window.
    pub fn work_hours(&self, clock_in: NaiveDateTime, clock_out: NaiveDateTime) -> WorkHoursResult {
        calculate_work_hours(clock_in, clock_out, self.teacher.day_start, self.teacher.day_end)
    }

    /// Child morning overtime units for an arrival.
    pub fn child_morning_overtime(&self, arrival: NaiveDateTime) -> i64 {
        calculate_child_morning_overtime(
            arrival,
            self.child.morning_cutoff,
            self.child.overtime_unit_minutes,
        )
    }

    /// Child evening overtime units for a departure.
    pub fn child_evening_overtime(&self, departure: NaiveDateTime) -> i64 {
        calculate_child_evening_overtime(
            departure,
            self.child.evening_cutoff,
            self.child.overtime_unit_minutes,
        )
    }
}

/// Work locations file structure (`work_locations.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkLocationsConfig {
    /// The registered work locations.
    #[serde(default)]
    pub work_locations: Vec<WorkLocation>,
}

impl WorkLocationsConfig {
    /// Checks that every location has valid coordinates.
    pub fn validate(&self) -> Result<(), String> {
        for location in &self.work_locations {
            GeoPoint::checked(location.latitude, location.longitude)
                .map_err(|e| format!("work location '{}': {}", location.name, e))?;
        }
        Ok(())
    }
}

/// The complete loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct AttendanceConfig {
    policy: AttendancePolicy,
    work_locations: Vec<WorkLocation>,
}

impl AttendanceConfig {
    /// Creates a new configuration.
    pub fn new(policy: AttendancePolicy, work_locations: Vec<WorkLocation>) -> Self {
        Self {
            policy,
            work_locations,
        }
    }

    /// Returns the attendance policy.
    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }

    /// Returns the configured work locations.
    pub fn work_locations(&self) -> &[WorkLocation] {
        &self.work_locations
    }
}
