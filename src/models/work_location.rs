//! Work location and geographic point types.
//!
//! Work locations are immutable reference data: the circle centres that
//! clock-in and clock-out positions are checked against.

use serde::{Deserialize, Serialize};

use crate::error::{AttendanceError, AttendanceResult};

/// A position on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point without range checks.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a point, rejecting non-finite or out-of-range coordinates.
    ///
    /// Zero is a valid coordinate for both axes.
    ///
    /// # Examples
    ///
    /// ```
    /// use daycare_attendance::models::GeoPoint;
    ///
    /// assert!(GeoPoint::checked(-7.688025, 110.414599).is_ok());
    /// assert!(GeoPoint::checked(0.0, 0.0).is_ok());
    /// assert!(GeoPoint::checked(91.0, 0.0).is_err());
    /// ```
    pub fn checked(latitude: f64, longitude: f64) -> AttendanceResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AttendanceError::InvalidInput {
                field: "latitude".to_string(),
                message: "must be between -90 and 90".to_string(),
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AttendanceError::InvalidInput {
                field: "longitude".to_string(),
                message: "must be between -180 and 180".to_string(),
            });
        }
        Ok(Self::new(latitude, longitude))
    }
}

/// A registered place of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLocation {
    /// Display name of the location.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Latitude of the fence centre in degrees.
    pub latitude: f64,
    /// Longitude of the fence centre in degrees.
    pub longitude: f64,
}

impl WorkLocation {
    /// Returns the fence centre as a [`GeoPoint`].
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
