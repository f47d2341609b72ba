//! The boundary table: polygon features plus named region boxes.
//!
//! A [`BoundaryTable`] is built once (from the built-in region boxes and,
//! optionally, a GeoJSON feature set) and then only ever read. Share it by
//! reference or `Arc` between as many classifiers as you like.

use serde::{Deserialize, Serialize};

use crate::codes::RegionCode;
use crate::containment::point_in_bounding_box;
use crate::geometry::{normalize_longitude, BoundingBox, Coordinate, Geometry};

// ============================================================================
// REGION BOXES
// ============================================================================

/// Axis-aligned region bounds in degrees.
///
/// When `min_lng > max_lng` the box crosses the antimeridian and covers
/// `[min_lng, 180] ∪ [-180, max_lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl RegionBounds {
    pub const fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self { min_lat, max_lat, min_lng, max_lng }
    }

    #[inline]
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lng > self.max_lng
    }

    /// One box, or two when this one crosses the antimeridian.
    pub fn split_at_antimeridian(&self) -> impl Iterator<Item = BoundingBox> + use<> {
        let (first, second) = if self.crosses_antimeridian() {
            (
                BoundingBox::new(self.min_lng, 180.0, self.min_lat, self.max_lat),
                Some(BoundingBox::new(-180.0, self.max_lng, self.min_lat, self.max_lat)),
            )
        } else {
            (
                BoundingBox::new(self.min_lng, self.max_lng, self.min_lat, self.max_lat),
                None,
            )
        };
        std::iter::once(first).chain(second)
    }

    /// Inclusive containment, antimeridian-aware. Expects a normalized
    /// longitude.
    pub fn contains(&self, point: Coordinate) -> bool {
        self.split_at_antimeridian()
            .any(|bbox| point_in_bounding_box(point, &bbox))
    }

    /// Longitude extent in degrees, measured eastwards from `min_lng`.
    pub fn longitude_span(&self) -> f64 {
        if self.crosses_antimeridian() {
            self.max_lng - self.min_lng + 360.0
        } else {
            self.max_lng - self.min_lng
        }
    }

    /// Box centre. For a crossing box the centre sits on the unwrapped
    /// span, so `{170, -170}` is centred on -180 rather than 0.
    pub fn centroid(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            normalize_longitude(self.min_lng + self.longitude_span() / 2.0),
        )
    }

    /// Area in square degrees.
    pub fn area(&self) -> f64 {
        self.longitude_span() * (self.max_lat - self.min_lat)
    }

    /// Draw order for map layers: smaller boxes get larger values so they
    /// sit on top of the basins they overlap. A box with no area (or a
    /// NaN area) is drawn last, at `u32::MAX`.
    pub fn render_priority(&self) -> u32 {
        let area = self.area();
        if !(area > 0.0) {
            return u32::MAX;
        }
        (10_000.0 / area).round() as u32
    }

    /// Whether the two boxes touch or overlap (edges count).
    pub fn intersects(&self, other: &RegionBounds) -> bool {
        let lat_overlap = self.min_lat <= other.max_lat && other.min_lat <= self.max_lat;
        lat_overlap
            && self.split_at_antimeridian().any(|a| {
                other
                    .split_at_antimeridian()
                    .any(|b| a.min_x <= b.max_x && b.min_x <= a.max_x)
            })
    }
}

/// A named region box: `EUROPE.WEST`, `PACIFIC.NORTH_EAST`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionBoundaryEntry {
    pub name: String,
    pub bounds: RegionBounds,
    pub code: RegionCode,
}

impl RegionBoundaryEntry {
    pub fn new(name: impl Into<String>, bounds: RegionBounds, code: RegionCode) -> Self {
        Self {
            name: name.into(),
            bounds,
            code,
        }
    }

    /// First dotted segment of the name (`PACIFIC` for `PACIFIC.NORTH_EAST`).
    pub fn group(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }
}

// ============================================================================
// POLYGON FEATURES
// ============================================================================

/// One longitude threshold of a split rule: longitudes strictly west of
/// `below` get `code`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeCut {
    pub below: f64,
    pub code: RegionCode,
}

/// How a matched feature turns into a leaf code.
///
/// Rules never influence *which* feature matches - they are applied only
/// after the match, to pick the leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeRule {
    /// Whole feature maps to one code.
    Fixed(RegionCode),
    /// Cuts are checked west to east; the first with `lng < below` wins,
    /// anything east of every cut gets `otherwise`.
    LongitudeSplit {
        cuts: Vec<LongitudeCut>,
        otherwise: RegionCode,
    },
    /// Feature spans several region boxes; the leaf comes from the region
    /// table at the query point.
    Regional,
}

impl CodeRule {
    /// Apply a split or fixed rule. `None` for [`CodeRule::Regional`],
    /// which needs the region table.
    pub fn apply(&self, lng: f64) -> Option<RegionCode> {
        match self {
            CodeRule::Fixed(code) => Some(*code),
            CodeRule::LongitudeSplit { cuts, otherwise } => Some(
                cuts.iter()
                    .find(|cut| lng < cut.below)
                    .map_or(*otherwise, |cut| cut.code),
            ),
            CodeRule::Regional => None,
        }
    }
}

/// A country (or other named area) with its boundary geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub id: String,
    pub geometry: Geometry,
    pub rule: CodeRule,
}

impl BoundaryFeature {
    pub fn new(id: impl Into<String>, geometry: Geometry, rule: CodeRule) -> Self {
        Self {
            id: id.into(),
            geometry,
            rule,
        }
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// Immutable registry of polygon features and region boxes.
///
/// Iteration order of both lists is the tie-break everywhere: the first
/// matching feature or box wins.
#[derive(Debug, Clone, Default)]
pub struct BoundaryTable {
    features: Vec<BoundaryFeature>,
    regions: Vec<RegionBoundaryEntry>,
}

impl BoundaryTable {
    pub fn new(features: Vec<BoundaryFeature>, regions: Vec<RegionBoundaryEntry>) -> Self {
        Self { features, regions }
    }

    /// No features, no boxes. Classification against it always yields
    /// `ANONYMOUS`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in region boxes, no polygon features.
    pub fn builtin() -> Self {
        Self::new(Vec::new(), crate::regions::builtin_regions())
    }

    /// Replace the polygon features, keeping the region boxes.
    pub fn with_features(mut self, features: Vec<BoundaryFeature>) -> Self {
        self.features = features;
        self
    }

    pub fn features(&self) -> &[BoundaryFeature] {
        &self.features
    }

    pub fn regions(&self) -> &[RegionBoundaryEntry] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.regions.is_empty()
    }

    /// All boxes carrying `code`, in table order.
    pub fn entries_for(&self, code: RegionCode) -> impl Iterator<Item = &RegionBoundaryEntry> {
        self.regions.iter().filter(move |entry| entry.code == code)
    }

    pub fn entry_named(&self, name: &str) -> Option<&RegionBoundaryEntry> {
        self.regions.iter().find(|entry| entry.name == name)
    }
}
