//! Point containment tests.
//!
//! This is the hot path of classification - every feature in the boundary
//! table goes through `point_in_polygon` until one matches.

use crate::geometry::{BoundingBox, Coordinate, Ring};

// ============================================================================
// POINT IN POLYGON (Ray Casting Algorithm)
// ============================================================================
//
// ## Rust Lesson #8: References & Slices
//
// `&[Coordinate]` is a borrowed view. It accepts a `Ring` (Vec), an array
// or any sub-slice without copying a single vertex.

/// Test if a point is inside a ring using ray casting.
///
/// Casts a ray towards +longitude and counts edge crossings; odd means
/// inside. Each edge is half-open in latitude (`yi > y` XOR `yj > y`), so a
/// vertex shared by two edges is counted exactly once and the result is
/// independent of which vertex the ring starts at.
///
/// Rings with fewer than 3 vertices contain nothing.
#[inline]
pub fn point_in_polygon(point: Coordinate, ring: &[Coordinate]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let (px, py) = (point.lng, point.lat);
    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (ring[i].lng, ring[i].lat);
        let (xj, yj) = (ring[j].lng, ring[j].lat);

        // The XOR already implies yi != yj, so the intercept never divides by zero.
        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

/// True iff any member ring contains the point.
pub fn point_in_multi_polygon(point: Coordinate, rings: &[Ring]) -> bool {
    rings.iter().any(|ring| point_in_polygon(point, ring))
}

/// Inclusive range test on both axes.
///
/// Knows nothing about the antimeridian: a box meant to cross it has to be
/// split first (see [`crate::boundary::RegionBounds::split_at_antimeridian`]).
#[inline]
pub fn point_in_bounding_box(point: Coordinate, bbox: &BoundingBox) -> bool {
    point.lng >= bbox.min_x
        && point.lng <= bbox.max_x
        && point.lat >= bbox.min_y
        && point.lat <= bbox.max_y
}

// ============================================================================
// TESTS
// ============================================================================
