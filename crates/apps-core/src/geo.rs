//! Spherical-earth destination point.

use crate::constants::{
    EARTH_RADIUS_M, SIMULATED_ACCURACY_M, SIMULATED_LATITUDE, SIMULATED_LONGITUDE,
};

/// One position reading, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_m: f64,
}

impl GeoFix {
    pub const fn new(latitude: f64, longitude: f64, accuracy_m: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m,
        }
    }

    /// Stand-in used whenever no live position can be obtained.
    pub const fn simulated() -> Self {
        Self::new(SIMULATED_LATITUDE, SIMULATED_LONGITUDE, SIMULATED_ACCURACY_M)
    }

    /// `"lat, lon"` with six decimals (roughly 0.1 m).
    pub fn format_coords(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Great-circle destination from `origin` along `heading_deg` (0 = north,
/// clockwise) for `distance_m` metres, on a sphere of radius `radius_m`.
///
/// The longitude is not wrapped; see [`normalize_longitude`].
pub fn project_on_sphere(origin: &GeoFix, heading_deg: f64, distance_m: f64, radius_m: f64) -> GeoFix {
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();
    let theta = heading_deg.to_radians();
    let delta = distance_m / radius_m;

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    GeoFix::new(lat2.to_degrees(), lon2.to_degrees(), origin.accuracy_m)
}

/// [`project_on_sphere`] with the mean Earth radius.
pub fn project(origin: &GeoFix, heading_deg: f64, distance_m: f64) -> GeoFix {
    project_on_sphere(origin, heading_deg, distance_m, EARTH_RADIUS_M)
}

/// Wrap a longitude into [-180, 180).
pub fn normalize_longitude(lon_deg: f64) -> f64 {
    (lon_deg + 180.0).rem_euclid(360.0) - 180.0
}
