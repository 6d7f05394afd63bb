//! Geofence evaluation.
//!
//! This module decides whether a reported position lies inside any of the
//! circular work-location fences, using the haversine great-circle distance.

use serde::Serialize;

use crate::models::{GeoPoint, WorkLocation};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default fence radius in kilometres (300 metres).
pub const DEFAULT_FENCE_TOLERANCE_KM: f64 = 0.3;

/// Returns the great-circle distance between two points in kilometres.
///
/// Uses the haversine formula:
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`,
/// `d = 2·R·atan2(√a, √(1−a))`.
///
/// # Examples
///
/// ```
/// use daycare_attendance::calculation::haversine_distance_km;
/// use daycare_attendance::models::GeoPoint;
///
/// let a = GeoPoint::new(-7.688025, 110.414599);
/// assert_eq!(haversine_distance_km(a, a), 0.0);
///
/// let b = GeoPoint::new(-7.697025, 110.414599);
/// let d = haversine_distance_km(a, b);
/// assert!((d - 1.0007).abs() < 0.001);
/// ```
pub fn haversine_distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` past 1 for near-antipodal points.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Returns true if `point` is within `tolerance_km` of at least one location.
///
/// An empty location set never matches. The test is inclusive: a point at
/// exactly `tolerance_km` is inside.
///
/// # Examples
///
/// ```
/// use daycare_attendance::calculation::{is_within_any_location, DEFAULT_FENCE_TOLERANCE_KM};
/// use daycare_attendance::models::{GeoPoint, WorkLocation};
///
/// let school = WorkLocation {
///     name: "Puskaga".to_string(),
///     address: "Jl. Kaliurang KM 14,5".to_string(),
///     latitude: -7.688025,
///     longitude: 110.414599,
/// };
///
/// let at_gate = GeoPoint::new(-7.688500, 110.414900);
/// assert!(is_within_any_location(at_gate, &[school.clone()], DEFAULT_FENCE_TOLERANCE_KM));
///
/// let downtown = GeoPoint::new(-7.795580, 110.369490);
/// assert!(!is_within_any_location(downtown, &[school], DEFAULT_FENCE_TOLERANCE_KM));
/// ```
pub fn is_within_any_location(point: GeoPoint, locations: &[WorkLocation], tolerance_km: f64) -> bool {
    locations
        .iter()
        .any(|location| haversine_distance_km(location.point(), point) <= tolerance_km)
}

/// The closest work location to a point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestLocation<'a> {
    /// The closest location.
    pub location: &'a WorkLocation,
    /// Its distance from the point in kilometres.
    pub distance_km: f64,
}

/// Finds the work location closest to `point`, or `None` if there are none.
pub fn nearest_location(point: GeoPoint, locations: &[WorkLocation]) -> Option<NearestLocation<'_>> {
    locations
        .iter()
        .map(|location| NearestLocation {
            location,
            distance_km: haversine_distance_km(location.point(), point),
        })
        .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
}
