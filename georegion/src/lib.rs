//! # georegion
//!
//! Coordinate to region-code classification, plus region-prefixed node
//! identifiers.
//!
//! ```text
//! (lat, lng) -> normalize -> polygon -> polygon bbox -> region box -> nearest
//!                                                                      |
//!                                          RegionCode (never fails) <--+
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are declared, never discovered:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Callers can write `georegion::RegionClassifier` instead of
//! `georegion::classify::RegionClassifier`.

pub mod airports;
pub mod boundary;
pub mod classify;
pub mod codes;
pub mod containment;
pub mod countries;
pub mod distance;
pub mod error;
pub mod geojson;
pub mod geometry;
pub mod grid;
pub mod identifier;
pub mod overlay;
pub mod regions;
pub mod topology;

// Re-export common types at crate root for convenience.
pub use airports::{nearest_airport, Airport};
pub use boundary::{BoundaryFeature, BoundaryTable, CodeRule, RegionBoundaryEntry, RegionBounds};
pub use classify::{classify, Classification, ClassifierConfig, MatchStage, RegionClassifier};
pub use codes::{Category, RegionCode};
pub use containment::{point_in_bounding_box, point_in_multi_polygon, point_in_polygon};
pub use distance::{degree_distance, great_circle_distance};
pub use error::{BoundaryError, IdentifierError};
pub use geojson::{load_boundaries, load_boundaries_with};
pub use geometry::{normalize_longitude, BoundingBox, Coordinate, Geometry, Ring};
pub use grid::{Cell, GridSpec};
pub use identifier::{derive_node_id, to_identifier, NodeId};
pub use overlay::cells_to_polygons;
pub use topology::{estimate_latency_ms, neighbors};
