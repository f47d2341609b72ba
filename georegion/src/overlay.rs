//! Grid cells to display polygons.
//!
//! A region's cells are merged row by row into horizontal strips, one ring
//! per strip. Cells in the first and last columns touch the antimeridian;
//! they are collected into separate west-edge and east-edge groups so no
//! strip is ever drawn across the -180/180 seam.
//!
//! ## Rust Lesson #12: BTreeMap for Deterministic Output
//!
//! `HashMap` iteration order changes from run to run. Grouping rows in a
//! `BTreeMap` keeps the emitted rings in north-to-south order, so two runs
//! over the same cells produce byte-identical SVG and GeoJSON.

use std::collections::{BTreeMap, BTreeSet};

use crate::boundary::RegionBounds;
use crate::geometry::{Coordinate, Ring};
use crate::grid::{Cell, GridSpec};

/// The four corners of a cell, clockwise from top-left.
#[derive(Debug, Clone, Copy)]
struct CellCorners {
    top_left: Coordinate,
    top_right: Coordinate,
    bottom_right: Coordinate,
    bottom_left: Coordinate,
}

impl CellCorners {
    fn of(grid: &GridSpec, cell: Cell) -> Self {
        let b = grid.cell_bounds(cell);
        Self {
            top_left: Coordinate::new(b.max_y, b.min_x),
            top_right: Coordinate::new(b.max_y, b.max_x),
            bottom_right: Coordinate::new(b.min_y, b.max_x),
            bottom_left: Coordinate::new(b.min_y, b.min_x),
        }
    }
}

/// Rings covering `cells`.
///
/// Interior cells come first, then the west-edge group (column 0), then the
/// east-edge group (last column). Duplicate cells are ignored.
pub fn cells_to_polygons(grid: &GridSpec, cells: &[Cell]) -> Vec<Ring> {
    let unique: BTreeSet<Cell> = cells.iter().copied().collect();

    let mut interior = Vec::new();
    let mut west = Vec::new();
    let mut east = Vec::new();

    for cell in unique {
        if cell.col == 0 {
            west.push(cell);
        } else if cell.col + 1 == grid.cols {
            east.push(cell);
        } else {
            interior.push(cell);
        }
    }

    let mut rings = merge_cells(grid, &interior);
    rings.extend(merge_cells(grid, &west));
    rings.extend(merge_cells(grid, &east));
    rings
}

/// Merge horizontally adjacent cells into strips.
///
/// Cells are grouped by row (shared top latitude) and sorted west to east;
/// a cell joins the current strip when its west edge is the previous
/// cell's east edge.
pub fn merge_cells(grid: &GridSpec, cells: &[Cell]) -> Vec<Ring> {
    let mut rows: BTreeMap<usize, Vec<Cell>> = BTreeMap::new();
    for &cell in cells {
        rows.entry(cell.row).or_default().push(cell);
    }

    let mut rings = Vec::new();
    for (_, mut row) in rows {
        row.sort_by_key(|cell| cell.col);
        row.dedup();

        let mut strip: Vec<CellCorners> = Vec::new();
        let mut last_col = None;

        for cell in row {
            if last_col.is_some_and(|col: usize| col + 1 != cell.col) {
                rings.push(merge_strip(&strip));
                strip.clear();
            }
            strip.push(CellCorners::of(grid, cell));
            last_col = Some(cell.col);
        }

        if !strip.is_empty() {
            rings.push(merge_strip(&strip));
        }
    }
    rings
}

/// One closed ring around a strip: the top edge west to east, down the
/// east side, the bottom edge east to west, then up the west side.
fn merge_strip(strip: &[CellCorners]) -> Ring {
    let (Some(first), Some(last)) = (strip.first(), strip.last()) else {
        return Vec::new();
    };

    let mut ring = Vec::with_capacity(strip.len() * 2 + 4);
    ring.extend(strip.iter().map(|c| c.top_left));
    ring.push(last.top_right);
    ring.push(last.bottom_right);
    ring.extend(strip.iter().rev().map(|c| c.bottom_left));
    ring.push(first.bottom_left);
    ring.push(first.top_left);
    ring
}

/// Closed rectangle rings for a region box; two when it crosses the
/// antimeridian.
pub fn region_rings(bounds: &RegionBounds) -> Vec<Ring> {
    bounds
        .split_at_antimeridian()
        .map(|b| {
            vec![
                Coordinate::new(b.max_y, b.min_x),
                Coordinate::new(b.max_y, b.max_x),
                Coordinate::new(b.min_y, b.max_x),
                Coordinate::new(b.min_y, b.min_x),
                Coordinate::new(b.max_y, b.min_x),
            ]
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
