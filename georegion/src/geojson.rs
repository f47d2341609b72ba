//! GeoJSON boundary loading.
//!
//! Reads a `FeatureCollection` of country polygons into [`BoundaryFeature`]s.
//! Only `Polygon` and `MultiPolygon` geometries are used, and only their
//! outer rings. Placeholder features whose outer ring is a plain rectangle
//! are dropped - those are bounding boxes, not boundaries.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::boundary::{BoundaryFeature, CodeRule};
use crate::countries::rule_for_country;
use crate::error::BoundaryError;
use crate::geometry::{Coordinate, Geometry, Ring};

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

type Position = Vec<f64>;

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    #[serde(other)]
    Other,
}

/// Load boundaries from a GeoJSON file using the built-in country rules.
pub fn load_boundaries(path: &Path) -> Result<Vec<BoundaryFeature>, BoundaryError> {
    load_boundaries_with(path, rule_for_country)
}

/// Load boundaries from a GeoJSON file, choosing each feature's code rule
/// with `rule_for`.
pub fn load_boundaries_with<F>(path: &Path, rule_for: F) -> Result<Vec<BoundaryFeature>, BoundaryError>
where
    F: Fn(&str) -> CodeRule,
{
    let json = fs::read_to_string(path).map_err(|source| BoundaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let features = parse_boundaries_with(&json, rule_for)?;
    tracing::info!(path = %path.display(), features = features.len(), "loaded boundaries");
    Ok(features)
}

/// Parse a GeoJSON string using the built-in country rules.
pub fn parse_boundaries(json: &str) -> Result<Vec<BoundaryFeature>, BoundaryError> {
    parse_boundaries_with(json, rule_for_country)
}

/// Parse a GeoJSON `FeatureCollection` string.
///
/// Features keep their input order, which is the order the classifier
/// scans them in.
pub fn parse_boundaries_with<F>(json: &str, rule_for: F) -> Result<Vec<BoundaryFeature>, BoundaryError>
where
    F: Fn(&str) -> CodeRule,
{
    let collection: FeatureCollection = serde_json::from_str(json)?;
    let mut features = Vec::with_capacity(collection.features.len());

    for (index, raw) in collection.features.into_iter().enumerate() {
        let id = feature_id(&raw, index);

        let geometry = match raw.geometry {
            Some(RawGeometry::Polygon { coordinates }) => {
                let Some(outer) = coordinates.into_iter().next() else {
                    tracing::debug!(%id, "skipping polygon without rings");
                    continue;
                };
                let ring = to_ring(&id, outer)?;
                if is_bounding_box_ring(&ring) {
                    tracing::debug!(%id, "skipping bounding-box placeholder feature");
                    continue;
                }
                Geometry::Polygon(ring)
            }
            Some(RawGeometry::MultiPolygon { coordinates }) => {
                let rings = coordinates
                    .into_iter()
                    .filter_map(|polygon| polygon.into_iter().next())
                    .map(|outer| to_ring(&id, outer))
                    .collect::<Result<Vec<_>, _>>()?;
                Geometry::MultiPolygon(rings)
            }
            Some(RawGeometry::Other) | None => {
                tracing::debug!(%id, "skipping feature without polygon geometry");
                continue;
            }
        };

        let rule = rule_for(&id);
        features.push(BoundaryFeature::new(id, geometry, rule));
    }

    Ok(features)
}

/// Feature id from `id`, then `properties.ISO_A3` / `iso_a3`, then its index.
fn feature_id(raw: &RawFeature, index: usize) -> String {
    let from_value = |value: &Value| match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };

    raw.id
        .as_ref()
        .and_then(from_value)
        .or_else(|| {
            let props = raw.properties.as_ref()?;
            ["ISO_A3", "iso_a3"]
                .iter()
                .find_map(|key| props.get(*key).and_then(from_value))
        })
        .unwrap_or_else(|| format!("feature-{}", index))
}

fn to_ring(id: &str, positions: Vec<Position>) -> Result<Ring, BoundaryError> {
    positions
        .into_iter()
        .map(|pos| match pos.as_slice() {
            [lng, lat, ..] => Ok(Coordinate::from_lng_lat(*lng, *lat)),
            _ => Err(BoundaryError::InvalidPosition {
                id: id.to_string(),
                len: pos.len(),
            }),
        })
        .collect()
}

/// A closed 5-position ring whose every vertex lies on the rectangle
/// spanned by its first and third vertices.
fn is_bounding_box_ring(ring: &[Coordinate]) -> bool {
    if ring.len() != 5 {
        return false;
    }

    let (min_x, min_y) = (ring[0].lng, ring[0].lat);
    let (max_x, max_y) = (ring[2].lng, ring[2].lat);

    ring.iter()
        .all(|p| p.lng == min_x || p.lng == max_x || p.lat == min_y || p.lat == max_y)
}
