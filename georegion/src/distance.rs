//! The two distance metrics used by the engine.
//!
//! They are deliberately separate functions. Nearest-region fallback ranks
//! boxes by [`degree_distance`]; airports and latency estimates use
//! [`great_circle_distance`]. Swapping one for the other changes which
//! region wins near the poles and across the antimeridian.

use crate::geometry::Coordinate;

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Straight-line distance in raw (lat, lng) degree space.
///
/// No wraparound: 179° and -179° are 358 degrees apart.
#[inline]
pub fn degree_distance(a: Coordinate, b: Coordinate) -> f64 {
    let dlat = a.lat - b.lat;
    let dlng = a.lng - b.lng;
    (dlat * dlat + dlng * dlng).sqrt()
}

/// Haversine great-circle distance in kilometres.
pub fn great_circle_distance(a: Coordinate, b: Coordinate) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
