//! Core geometry types for georegion.
//!
//! Everything here works in plain equirectangular degrees: `lng` is the
//! x axis, `lat` is the y axis. There is no projection and no notion of
//! the sphere except in [`crate::distance::great_circle_distance`].
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(Clone, Copy)]` on a two-float struct means it is passed by
//! value everywhere, like a JS number. A `Ring` is a `Vec` and therefore
//! *owned* - functions that only look at it take `&[Coordinate]`.

use serde::{Deserialize, Serialize};

use crate::containment::{point_in_bounding_box, point_in_multi_polygon, point_in_polygon};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A closed ring of vertices. The last vertex connects back to the first,
/// whether or not the data repeats it.
pub type Ring = Vec<Coordinate>;

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build from GeoJSON `[lng, lat]` ordering.
    #[inline]
    pub fn from_lng_lat(lng: f64, lat: f64) -> Self {
        Self { lat, lng }
    }

    /// Same latitude, longitude wrapped into [-180, 180).
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(self.lat, normalize_longitude(self.lng))
    }
}

/// Wrap any longitude into [-180, 180).
///
/// `((lng + 180) mod 360) - 180` with a euclidean remainder, so negative
/// inputs land on the right side. Non-finite input comes back as NaN.
/// In-range input is returned untouched, so wrapping twice is a no-op.
pub fn normalize_longitude(lng: f64) -> f64 {
    if (-180.0..180.0).contains(&lng) {
        return lng;
    }
    let mut wrapped = (lng + 180.0).rem_euclid(360.0);
    // rem_euclid can round up to exactly the divisor for tiny negatives
    if wrapped >= 360.0 {
        wrapped = 0.0;
    }
    wrapped - 180.0
}

// ============================================================================
// GEOMETRY (Polygon | MultiPolygon)
// ============================================================================
//
// ## Rust Lesson #4: Enums carry data
//
// GeoJSON says `{"type": "Polygon", ...}` and the reader has to check the
// string. Here the variant *is* the type - `match` forces both arms to be
// handled, so there is no "unknown geometry" path at runtime.

/// Aggregate box width (degrees) above which a geometry is treated as
/// split at the antimeridian.
pub const SEAM_SPLIT_WIDTH: f64 = 180.0;

/// Boundary geometry of a feature. Only outer rings are kept; holes are
/// not part of containment.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Ring),
    MultiPolygon(Vec<Ring>),
}

impl Geometry {
    /// Exact ray-casting containment. Any member ring containing the
    /// point makes a multipolygon match.
    pub fn contains(&self, point: Coordinate) -> bool {
        match self {
            Geometry::Polygon(ring) => point_in_polygon(point, ring),
            Geometry::MultiPolygon(rings) => point_in_multi_polygon(point, rings),
        }
    }

    /// Inclusive bounding-box containment. A degenerate box (zero width
    /// or height) never contains anything.
    ///
    /// A multipolygon split at the antimeridian has an aggregate box
    /// spanning most of the globe; past [`SEAM_SPLIT_WIDTH`] each member
    /// ring's own box is tested instead.
    pub fn bounding_box_contains(&self, point: Coordinate) -> bool {
        match self.bounding_box() {
            Some(bbox) if bbox.width() > SEAM_SPLIT_WIDTH => self
                .rings()
                .iter()
                .filter_map(|ring| BoundingBox::of_points(ring.iter().copied()))
                .any(|ring_box| !ring_box.is_degenerate() && point_in_bounding_box(point, &ring_box)),
            Some(bbox) if !bbox.is_degenerate() => point_in_bounding_box(point, &bbox),
            _ => false,
        }
    }

    /// Bounding box over every vertex of every member ring.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Geometry::Polygon(ring) => BoundingBox::of_points(ring.iter().copied()),
            Geometry::MultiPolygon(rings) => {
                BoundingBox::of_points(rings.iter().flat_map(|ring| ring.iter().copied()))
            }
        }
    }

    pub fn rings(&self) -> &[Ring] {
        match self {
            Geometry::Polygon(ring) => std::slice::from_ref(ring),
            Geometry::MultiPolygon(rings) => rings,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.rings().iter().map(Vec::len).sum()
    }
}

// ============================================================================
// BOUNDING BOX
// ============================================================================

/// Axis-aligned box in degree space (`x` = longitude, `y` = latitude).
///
/// Never wraps: a box built from vertices on both sides of the antimeridian
/// simply spans the whole longitude range between them. See
/// [`Geometry::bounding_box_contains`] for how containment copes with that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Smallest box holding every point, or `None` for no points.
    pub fn of_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let init = Self::new(first.lng, first.lng, first.lat, first.lat);

        Some(points.fold(init, |bbox, p| Self {
            min_x: bbox.min_x.min(p.lng),
            max_x: bbox.max_x.max(p.lng),
            min_y: bbox.min_y.min(p.lat),
            max_y: bbox.max_y.max(p.lat),
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Zero area (a point or a line) - treated as non-containing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    #[inline]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_y + self.max_y) / 2.0,
            (self.min_x + self.max_x) / 2.0,
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
