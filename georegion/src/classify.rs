//! Region classification.
//!
//! Maps a coordinate to a [`RegionCode`] in stages, stopping at the first
//! stage that produces an answer:
//!
//! 1. **Polygon** - exact ray-casting against every feature, in order.
//! 2. **Polygon bounding box** - the same features, by bounding box.
//! 3. **Region box** - first built-in region box containing the point.
//! 4. **Nearest** - region box whose centroid is closest in degree space.
//! 5. **Unknown** - `ANONYMOUS`, only reachable with an empty table or a
//!    non-finite coordinate.
//!
//! A feature match runs the feature's [`CodeRule`](crate::boundary::CodeRule)
//! to pick the leaf code.
//! The rule never changes *which* feature matched.
//!
//! Classification is a pure function of the table and the input, so a
//! classifier can be shared freely between threads.

use serde::{Deserialize, Serialize};

use crate::boundary::{BoundaryFeature, BoundaryTable, RegionBoundaryEntry};
use crate::codes::{special, RegionCode};
use crate::distance::degree_distance;
use crate::geometry::Coordinate;

/// Which fallback stages are enabled. Exact polygon matching is always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    pub polygon_bbox_fallback: bool,
    pub region_box_match: bool,
    pub nearest_fallback: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            polygon_bbox_fallback: true,
            region_box_match: true,
            nearest_fallback: true,
        }
    }
}

/// The stage that produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    Polygon,
    PolygonBoundingBox,
    RegionBox,
    Nearest,
    Unknown,
}

impl MatchStage {
    pub fn name(&self) -> &'static str {
        match self {
            MatchStage::Polygon => "polygon",
            MatchStage::PolygonBoundingBox => "polygon_bounding_box",
            MatchStage::RegionBox => "region_box",
            MatchStage::Nearest => "nearest",
            MatchStage::Unknown => "unknown",
        }
    }
}

/// A classification with the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub code: RegionCode,
    pub stage: MatchStage,
    /// Id of the matched polygon feature, if any.
    pub feature: Option<String>,
    /// Name of the region box that decided the leaf code, if any.
    pub region: Option<String>,
}

/// Classifier over a borrowed, read-only [`BoundaryTable`].
#[derive(Debug, Clone, Copy)]
pub struct RegionClassifier<'t> {
    table: &'t BoundaryTable,
    config: ClassifierConfig,
}

impl<'t> RegionClassifier<'t> {
    pub fn new(table: &'t BoundaryTable) -> Self {
        Self::with_config(table, ClassifierConfig::default())
    }

    pub fn with_config(table: &'t BoundaryTable, config: ClassifierConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &'t BoundaryTable {
        self.table
    }

    pub fn config(&self) -> ClassifierConfig {
        self.config
    }

    /// Classify a coordinate. Never fails; falls back to `ANONYMOUS`.
    ///
    /// Latitude is not validated. Longitude may be any real number and is
    /// wrapped into [-180, 180) first.
    pub fn classify(&self, lat: f64, lng: f64) -> RegionCode {
        self.classify_detailed(lat, lng).code
    }

    /// Like [`classify`](Self::classify), but reports the deciding stage.
    pub fn classify_detailed(&self, lat: f64, lng: f64) -> Classification {
        let point = Coordinate::new(lat, lng).normalized();
        let result = self.classify_point(point);

        tracing::debug!(
            lat,
            lng = point.lng,
            code = %result.code,
            stage = result.stage.name(),
            feature = result.feature.as_deref(),
            "classified"
        );
        result
    }

    fn classify_point(&self, point: Coordinate) -> Classification {
        if self.table.is_empty() {
            return unknown();
        }

        if let Some(feature) = self.exact_match(point) {
            return self.from_feature(feature, point, MatchStage::Polygon);
        }

        if self.config.polygon_bbox_fallback {
            if let Some(feature) = self.bounding_box_match(point) {
                return self.from_feature(feature, point, MatchStage::PolygonBoundingBox);
            }
        }

        if self.config.region_box_match {
            if let Some(entry) = self.region_box_match(point) {
                return from_region(entry, MatchStage::RegionBox);
            }
        }

        if self.config.nearest_fallback {
            if let Some(entry) = self.nearest_region(point) {
                return from_region(entry, MatchStage::Nearest);
            }
        }

        unknown()
    }

    /// First feature whose geometry contains the point.
    pub fn exact_match(&self, point: Coordinate) -> Option<&'t BoundaryFeature> {
        let hit = self
            .table
            .features()
            .iter()
            .find(|feature| feature.geometry.contains(point));
        if hit.is_none() {
            tracing::trace!(lat = point.lat, lng = point.lng, "no polygon contains point");
        }
        hit
    }

    /// First feature whose bounding box contains the point.
    pub fn bounding_box_match(&self, point: Coordinate) -> Option<&'t BoundaryFeature> {
        self.table
            .features()
            .iter()
            .find(|feature| feature.geometry.bounding_box_contains(point))
    }

    /// First region box, in table order, containing the point.
    pub fn region_box_match(&self, point: Coordinate) -> Option<&'t RegionBoundaryEntry> {
        self.table
            .regions()
            .iter()
            .find(|entry| entry.bounds.contains(point))
    }

    /// Region box with the closest centroid by [`degree_distance`].
    ///
    /// Ties keep the entry seen first. `None` for an empty table or a
    /// point whose distances are all NaN.
    pub fn nearest_region(&self, point: Coordinate) -> Option<&'t RegionBoundaryEntry> {
        let mut best: Option<(&RegionBoundaryEntry, f64)> = None;

        for entry in self.table.regions() {
            let distance = degree_distance(point, entry.bounds.centroid());
            let closer = match best {
                Some((_, shortest)) => distance < shortest,
                None => distance.is_finite(),
            };
            if closer {
                best = Some((entry, distance));
            }
        }

        best.map(|(entry, _)| entry)
    }

    fn from_feature(
        &self,
        feature: &BoundaryFeature,
        point: Coordinate,
        stage: MatchStage,
    ) -> Classification {
        let (code, region) = match feature.rule.apply(point.lng) {
            Some(code) => (code, None),
            None => self.resolve_regional(point),
        };

        Classification {
            code,
            stage,
            feature: Some(feature.id.clone()),
            region,
        }
    }

    /// Leaf code for a `CodeRule::Regional` feature: the region box at
    /// the point, else the nearest one.
    fn resolve_regional(&self, point: Coordinate) -> (RegionCode, Option<String>) {
        self.region_box_match(point)
            .or_else(|| self.nearest_region(point))
            .map_or((special::ANONYMOUS, None), |entry| {
                (entry.code, Some(entry.name.clone()))
            })
    }
}

fn from_region(entry: &RegionBoundaryEntry, stage: MatchStage) -> Classification {
    Classification {
        code: entry.code,
        stage,
        feature: None,
        region: Some(entry.name.clone()),
    }
}

fn unknown() -> Classification {
    Classification {
        code: special::ANONYMOUS,
        stage: MatchStage::Unknown,
        feature: None,
        region: None,
    }
}

/// One-shot classification with the default stages.
pub fn classify(table: &BoundaryTable, lat: f64, lng: f64) -> RegionCode {
    RegionClassifier::new(table).classify(lat, lng)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{CodeRule, RegionBounds};
    use crate::codes::{africa, asia, europe, major, north_america, oceania, special};
    use crate::countries::{canada_rule, usa_rule};
    use crate::geometry::{Geometry, Ring};
    use proptest::prelude::*;

    fn rect(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Ring {
        // Six vertices so it is not mistaken for a placeholder box anywhere.
        vec![
            Coordinate::from_lng_lat(min_lng, min_lat),
            Coordinate::from_lng_lat((min_lng + max_lng) / 2.0, min_lat),
            Coordinate::from_lng_lat(max_lng, min_lat),
            Coordinate::from_lng_lat(max_lng, max_lat),
            Coordinate::from_lng_lat((min_lng + max_lng) / 2.0, max_lat),
            Coordinate::from_lng_lat(min_lng, max_lat),
        ]
    }

    /// Rough contiguous-US and Canada blocks plus a triangle for France.
    fn table_with_countries() -> BoundaryTable {
        let usa = BoundaryFeature::new(
            "USA",
            Geometry::Polygon(rect(-125.0, 25.0, -66.0, 49.0)),
            usa_rule(),
        );
        let can = BoundaryFeature::new(
            "CAN",
            Geometry::Polygon(rect(-141.0, 49.0, -52.0, 70.0)),
            canada_rule(),
        );
        let fra = BoundaryFeature::new(
            "FRA",
            Geometry::Polygon(vec![
                Coordinate::from_lng_lat(-5.0, 48.0),
                Coordinate::from_lng_lat(8.0, 51.0),
                Coordinate::from_lng_lat(7.0, 43.0),
            ]),
            CodeRule::Fixed(europe::WEST),
        );
        let rus = BoundaryFeature::new(
            "RUS",
            Geometry::MultiPolygon(vec![
                rect(30.0, 45.0, 60.0, 66.0),
                rect(100.0, 50.0, 170.0, 66.0),
            ]),
            CodeRule::Regional,
        );
        BoundaryTable::builtin().with_features(vec![usa, can, fra, rus])
    }

    #[test]
    fn usa_splits_by_longitude() {
        let table = table_with_countries();
        let classifier = RegionClassifier::new(&table);

        assert_eq!(classifier.classify(40.0, -120.0), north_america::USA_WEST);
        assert_eq!(classifier.classify(40.0, -100.0), north_america::USA_CENTRAL);
        // -90 is east of the -98 threshold
        assert_eq!(classifier.classify(40.0, -90.0), north_america::USA_EAST);
        assert_eq!(classifier.classify(40.0, -70.0), north_america::USA_EAST);

        let detail = classifier.classify_detailed(40.0, -120.0);
        assert_eq!(detail.stage, MatchStage::Polygon);
        assert_eq!(detail.feature.as_deref(), Some("USA"));
    }

    #[test]
    fn canada_splits_by_longitude() {
        let table = table_with_countries();
        let classifier = RegionClassifier::new(&table);

        assert_eq!(classifier.classify(51.0447, -114.0719), north_america::CANADA_WEST);
        assert_eq!(classifier.classify(45.5, -73.5), north_america::USA_EAST);
        assert_eq!(classifier.classify(55.0, -73.5), north_america::CANADA_EAST);
    }

    #[test]
    fn first_feature_in_order_wins() {
        // USA and CAN share the 49th parallel; the USA ring's top edge is
        // outside (half-open), so the point lands in CAN.
        let table = table_with_countries();
        let detail = RegionClassifier::new(&table).classify_detailed(49.0, -90.0);
        assert_eq!(detail.feature.as_deref(), Some("CAN"));
        assert_eq!(detail.code, north_america::CANADA_EAST);
    }

    #[test]
    fn bounding_box_fallback_applies_the_rule() {
        let table = table_with_countries();
        let classifier = RegionClassifier::new(&table);

        // Inside the FRA triangle's bbox but outside the triangle itself.
        let detail = classifier.classify_detailed(50.5, -4.0);
        assert_eq!(detail.stage, MatchStage::PolygonBoundingBox);
        assert_eq!(detail.feature.as_deref(), Some("FRA"));
        assert_eq!(detail.code, europe::WEST);
    }

    #[test]
    fn seam_split_feature_does_not_claim_other_oceans() {
        let fiji = BoundaryFeature::new(
            "FJI",
            Geometry::MultiPolygon(vec![
                rect(177.0, -19.0, 180.0, -16.0),
                rect(-180.0, -19.0, -179.0, -16.0),
            ]),
            CodeRule::Fixed(oceania::PACIFIC_ISLANDS),
        );
        let table = BoundaryTable::builtin().with_features(vec![fiji]);
        let classifier = RegionClassifier::new(&table);

        let indian_ocean = classifier.classify_detailed(-17.0, 70.0);
        assert_ne!(indian_ocean.stage, MatchStage::PolygonBoundingBox);
        assert_eq!(indian_ocean.feature, None);

        let near_fiji = classifier.classify_detailed(-16.5, -179.5);
        assert_eq!(near_fiji.feature.as_deref(), Some("FJI"));
        assert_eq!(near_fiji.code, oceania::PACIFIC_ISLANDS);
    }

    #[test]
    fn regional_feature_resolves_through_region_boxes() {
        let table = table_with_countries();
        let classifier = RegionClassifier::new(&table);

        let moscow = classifier.classify_detailed(55.75, 37.6);
        assert_eq!(moscow.feature.as_deref(), Some("RUS"));
        assert_eq!(moscow.code, europe::EAST);
        assert_eq!(moscow.region.as_deref(), Some("EUROPE.EAST"));

        let siberia = classifier.classify(60.0, 130.0);
        assert_eq!(siberia, asia::RUSSIA_EAST);
    }

    #[test]
    fn region_boxes_without_features() {
        let table = BoundaryTable::builtin();
        let classifier = RegionClassifier::new(&table);

        assert_eq!(classifier.classify(51.0447, -114.0719), north_america::CANADA_WEST);
        assert_eq!(classifier.classify(40.7128, -74.0060), north_america::USA_EAST);
        assert_eq!(classifier.classify(35.6762, 139.6503), asia::EAST_COAST);
        assert_eq!(classifier.classify(48.8566, 2.3522), europe::WEST);
        assert_eq!(classifier.classify(-33.8688, 151.2093), oceania::AUSTRALIA);
        assert_eq!(classifier.classify(30.0444, 31.2357), africa::NORTH);
        assert_eq!(classifier.classify(85.0, 10.0), major::ARCTIC);
        assert_eq!(classifier.classify(-80.0, 10.0), major::ANTARCTIC);
    }

    #[test]
    fn longitude_is_normalized_first() {
        let table = BoundaryTable::builtin();
        let classifier = RegionClassifier::new(&table);
        assert_eq!(
            classifier.classify(40.7128, -74.0060 + 360.0),
            classifier.classify(40.7128, -74.0060)
        );
        assert_eq!(classifier.classify(-33.8688, 151.2093 - 720.0), oceania::AUSTRALIA);
    }

    #[test]
    fn antimeridian_region_box_matches_both_sides() {
        let table = BoundaryTable::new(
            Vec::new(),
            vec![
                RegionBoundaryEntry::new("A", RegionBounds::new(0.0, 20.0, 170.0, -170.0), major::NORTH_PACIFIC),
                RegionBoundaryEntry::new("B", RegionBounds::new(0.0, 20.0, -20.0, 20.0), major::NORTH_ATLANTIC),
            ],
        );
        let classifier = RegionClassifier::new(&table);

        assert_eq!(classifier.classify(10.0, 179.9), major::NORTH_PACIFIC);
        assert_eq!(classifier.classify(10.0, -179.9), major::NORTH_PACIFIC);
        assert_eq!(classifier.classify(10.0, 180.0), major::NORTH_PACIFIC);
        assert_eq!(classifier.classify(10.0, 0.0), major::NORTH_ATLANTIC);
    }

    #[test]
    fn overlapping_boxes_first_match_wins() {
        let table = BoundaryTable::new(
            Vec::new(),
            vec![
                RegionBoundaryEntry::new("BIG", RegionBounds::new(-50.0, 50.0, -50.0, 50.0), major::SOUTH_ATLANTIC),
                RegionBoundaryEntry::new("SMALL", RegionBounds::new(-1.0, 1.0, -1.0, 1.0), europe::WEST),
            ],
        );
        assert_eq!(classify(&table, 0.0, 0.0), major::SOUTH_ATLANTIC);
    }

    #[test]
    fn nearest_fallback_picks_closest_centroid() {
        let table = BoundaryTable::new(
            Vec::new(),
            vec![
                RegionBoundaryEntry::new("WEST", RegionBounds::new(0.0, 10.0, -30.0, -20.0), europe::WEST),
                RegionBoundaryEntry::new("EAST", RegionBounds::new(0.0, 10.0, 20.0, 30.0), europe::EAST),
            ],
        );
        let classifier = RegionClassifier::new(&table);

        let detail = classifier.classify_detailed(5.0, 15.0);
        assert_eq!(detail.stage, MatchStage::Nearest);
        assert_eq!(detail.code, europe::EAST);
        assert_eq!(classifier.classify(5.0, -15.0), europe::WEST);
    }

    #[test]
    fn nearest_fallback_tie_goes_to_first_entry() {
        // Centroids at lng -25 and +25; the query at lng 0 is equidistant.
        let west = RegionBoundaryEntry::new("WEST", RegionBounds::new(0.0, 10.0, -30.0, -20.0), europe::WEST);
        let east = RegionBoundaryEntry::new("EAST", RegionBounds::new(0.0, 10.0, 20.0, 30.0), europe::EAST);

        let west_first = BoundaryTable::new(Vec::new(), vec![west.clone(), east.clone()]);
        let east_first = BoundaryTable::new(Vec::new(), vec![east, west]);

        assert_eq!(classify(&west_first, 5.0, 0.0), europe::WEST);
        assert_eq!(classify(&east_first, 5.0, 0.0), europe::EAST);

        let point = Coordinate::new(5.0, 0.0);
        assert_eq!(
            RegionClassifier::new(&west_first).nearest_region(point).map(|e| e.name.as_str()),
            Some("WEST")
        );
    }

    #[test]
    fn nearest_uses_degree_distance_not_great_circle() {
        // Point at lat 80. By great circle, the polar box centroid is much
        // closer; in raw degrees the equator box straight below wins.
        let table = BoundaryTable::new(
            Vec::new(),
            vec![
                RegionBoundaryEntry::new("POLE_FAR", RegionBounds::new(80.0, 82.0, 150.0, 170.0), major::ARCTIC),
                RegionBoundaryEntry::new("BELOW", RegionBounds::new(-10.0, 10.0, -10.0, 10.0), major::NORTH_ATLANTIC),
            ],
        );
        let classifier = RegionClassifier::with_config(
            &table,
            ClassifierConfig { region_box_match: false, ..ClassifierConfig::default() },
        );
        assert_eq!(classifier.classify(80.0, -20.0), major::NORTH_ATLANTIC);
    }

    #[test]
    fn disabled_stages_are_skipped() {
        let table = table_with_countries();
        let config = ClassifierConfig {
            polygon_bbox_fallback: false,
            region_box_match: false,
            nearest_fallback: false,
        };
        let classifier = RegionClassifier::with_config(&table, config);

        let detail = classifier.classify_detailed(50.5, -4.0);
        assert_eq!(detail.stage, MatchStage::Unknown);
        assert_eq!(detail.code, special::ANONYMOUS);
    }

    #[test]
    fn empty_table_yields_anonymous() {
        let table = BoundaryTable::empty();
        let detail = RegionClassifier::new(&table).classify_detailed(10.0, 10.0);
        assert_eq!(detail.code, special::ANONYMOUS);
        assert_eq!(detail.stage, MatchStage::Unknown);
    }

    #[test]
    fn nan_yields_anonymous() {
        let table = table_with_countries();
        assert_eq!(classify(&table, f64::NAN, 0.0), special::ANONYMOUS);
        assert_eq!(classify(&table, 0.0, f64::INFINITY), special::ANONYMOUS);
    }

    #[test]
    fn out_of_range_latitude_still_classifies() {
        let table = BoundaryTable::builtin();
        let code = classify(&table, 120.0, 0.0);
        assert!(code.is_known());
        assert_eq!(code, major::ARCTIC);
    }

    proptest! {
        #[test]
        fn classify_is_total_and_in_namespace(lat in -90.0f64..=90.0, lng in -1000.0f64..1000.0) {
            let table = table_with_countries();
            let code = RegionClassifier::new(&table).classify(lat, lng);
            prop_assert!(code.is_known(), "{} not in namespace", code);
        }

        #[test]
        fn classify_is_deterministic(lat in -90.0f64..=90.0, lng in -180.0f64..180.0) {
            let table = BoundaryTable::builtin();
            let classifier = RegionClassifier::new(&table);
            prop_assert_eq!(classifier.classify_detailed(lat, lng), classifier.classify_detailed(lat, lng));
        }
    }
}
