//! A uniform lat/lng grid over the globe.
//!
//! Row 0 is the northernmost band (top edge at 90°), column 0 the
//! westernmost (left edge at -180°). Cell `(row, col)` covers
//!
//! ```text
//! lat: [90 - (row+1)*h, 90 - row*h]
//! lng: [-180 + col*w,   -180 + (col+1)*w]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classify::RegionClassifier;
use crate::codes::RegionCode;
use crate::geometry::{normalize_longitude, BoundingBox, Coordinate};

/// Grid dimensions. Cell sizes are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    pub cell_height: f64,
    pub cell_width: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 18,
            cols: 36,
            cell_height: 10.0,
            cell_width: 10.0,
        }
    }
}

/// One grid cell. Orders row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize, cell_height: f64, cell_width: f64) -> Self {
        Self { rows, cols, cell_height, cell_width }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `col` touches the antimeridian seam.
    pub fn is_edge_column(&self, col: usize) -> bool {
        col == 0 || col + 1 == self.cols
    }

    /// Cell containing a coordinate, or `None` if it falls outside the grid.
    ///
    /// Longitude is normalized first. A point on a shared edge belongs to
    /// the cell below / to the east, except at the grid's own bottom edge.
    pub fn cell_of(&self, lat: f64, lng: f64) -> Option<Cell> {
        if !lat.is_finite() || !lng.is_finite() || self.rows == 0 || self.cols == 0 {
            return None;
        }

        let row = ((90.0 - lat) / self.cell_height).floor();
        let col = ((normalize_longitude(lng) + 180.0) / self.cell_width).floor();
        if row < 0.0 || col < 0.0 {
            return None;
        }

        let (mut row, col) = (row as usize, col as usize);
        if row == self.rows && lat == 90.0 - self.rows as f64 * self.cell_height {
            row -= 1;
        }
        (row < self.rows && col < self.cols).then_some(Cell { row, col })
    }

    /// Bounds of a cell: x is longitude, y is latitude.
    pub fn cell_bounds(&self, cell: Cell) -> BoundingBox {
        let top = 90.0 - cell.row as f64 * self.cell_height;
        let left = -180.0 + cell.col as f64 * self.cell_width;
        BoundingBox::new(left, left + self.cell_width, top - self.cell_height, top)
    }

    pub fn cell_center(&self, cell: Cell) -> Coordinate {
        self.cell_bounds(cell).center()
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell { row, col }))
    }

    /// Classify each cell centre and group the cells by code.
    pub fn assign_cells(&self, classifier: &RegionClassifier<'_>) -> BTreeMap<RegionCode, Vec<Cell>> {
        let mut assignment: BTreeMap<RegionCode, Vec<Cell>> = BTreeMap::new();

        for cell in self.cells() {
            let center = self.cell_center(cell);
            let code = classifier.classify(center.lat, center.lng);
            assignment.entry(code).or_default().push(cell);
        }

        tracing::debug!(
            cells = self.cell_count(),
            regions = assignment.len(),
            "assigned grid cells"
        );
        assignment
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryTable;
    use crate::codes::{europe, major, north_america};

    #[test]
    fn default_grid_covers_globe() {
        let grid = GridSpec::default();
        assert_eq!(grid.cell_count(), 648);
        assert_eq!(grid.cell_bounds(Cell::new(0, 0)), BoundingBox::new(-180.0, -170.0, 80.0, 90.0));
        assert_eq!(grid.cell_bounds(Cell::new(17, 35)), BoundingBox::new(170.0, 180.0, -90.0, -80.0));
    }

    #[test]
    fn cell_of_points() {
        let grid = GridSpec::default();
        assert_eq!(grid.cell_of(85.0, -175.0), Some(Cell::new(0, 0)));
        assert_eq!(grid.cell_of(48.8, 2.3), Some(Cell::new(4, 18)));
        assert_eq!(grid.cell_of(-33.9, 151.2), Some(Cell::new(12, 33)));
        // Wrapped longitude
        assert_eq!(grid.cell_of(48.8, 362.3), Some(Cell::new(4, 18)));
        assert_eq!(grid.cell_of(-90.0, 179.9), Some(Cell::new(17, 35)));
        assert_eq!(grid.cell_of(90.0, 180.0), Some(Cell::new(0, 0)));
    }

    #[test]
    fn cell_of_rejects_outside() {
        let grid = GridSpec::default();
        assert_eq!(grid.cell_of(95.0, 0.0), None);
        assert_eq!(grid.cell_of(-95.0, 0.0), None);
        assert_eq!(grid.cell_of(f64::NAN, 0.0), None);
    }

    #[test]
    fn center_round_trips() {
        let grid = GridSpec::default();
        for cell in grid.cells() {
            let c = grid.cell_center(cell);
            assert_eq!(grid.cell_of(c.lat, c.lng), Some(cell));
        }
    }

    #[test]
    fn edge_columns() {
        let grid = GridSpec::default();
        assert!(grid.is_edge_column(0));
        assert!(grid.is_edge_column(35));
        assert!(!grid.is_edge_column(1));
    }

    #[test]
    fn assigns_every_cell_once() {
        let table = BoundaryTable::builtin();
        let classifier = RegionClassifier::new(&table);
        let grid = GridSpec::default();

        let assignment = grid.assign_cells(&classifier);
        let total: usize = assignment.values().map(Vec::len).sum();
        assert_eq!(total, grid.cell_count());

        let region_of = |lat, lng| {
            let cell = grid.cell_of(lat, lng).unwrap();
            *assignment.iter().find(|(_, cells)| cells.contains(&cell)).unwrap().0
        };
        // Cell centres: (45, 5) and (35, -95)
        assert_eq!(region_of(48.0, 2.0), europe::WEST);
        assert_eq!(region_of(38.0, -98.0), north_america::USA_CENTRAL);
        assert_eq!(region_of(88.0, 0.0), major::ARCTIC);
    }
}
