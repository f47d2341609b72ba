//! Relations between regions: which boxes touch, and how far apart their
//! centres are in network terms.

use std::collections::BTreeSet;

use crate::boundary::BoundaryTable;
use crate::codes::RegionCode;
use crate::distance::great_circle_distance;

/// Milliseconds of estimated latency per great-circle kilometre.
pub const LATENCY_MS_PER_KM: f64 = 0.1;

/// Codes whose region boxes touch or overlap any box of `code`, sorted.
///
/// `code` itself is never listed. Unknown codes have no neighbours.
pub fn neighbors(table: &BoundaryTable, code: RegionCode) -> Vec<RegionCode> {
    let own: Vec<_> = table.entries_for(code).collect();

    let found: BTreeSet<RegionCode> = table
        .regions()
        .iter()
        .filter(|entry| entry.code != code)
        .filter(|entry| own.iter().any(|mine| mine.bounds.intersects(&entry.bounds)))
        .map(|entry| entry.code)
        .collect();

    found.into_iter().collect()
}

/// Rough one-way latency between two regions, from the great-circle
/// distance between their box centroids.
///
/// Uses the first box listed for each code. `None` if either has no box.
pub fn estimate_latency_ms(table: &BoundaryTable, a: RegionCode, b: RegionCode) -> Option<u64> {
    let from = table.entries_for(a).next()?.bounds.centroid();
    let to = table.entries_for(b).next()?.bounds.centroid();

    let km = great_circle_distance(from, to);
    Some((km * LATENCY_MS_PER_KM).floor() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{asia, europe, major, north_america, oceania, special};

    #[test]
    fn neighbours_of_western_europe() {
        let table = BoundaryTable::builtin();
        let found = neighbors(&table, europe::WEST);

        assert!(found.contains(&europe::CENTRAL));
        assert!(found.contains(&europe::SOUTH));
        assert!(!found.contains(&europe::WEST));
        assert!(!found.contains(&asia::EAST_COAST));
        assert!(found.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn neighbours_across_antimeridian() {
        let table = BoundaryTable::builtin();
        let found = neighbors(&table, oceania::PACIFIC_ISLANDS);
        assert!(found.contains(&special::PACIFIC_NORTHEAST));
        assert!(found.contains(&major::SOUTH_PACIFIC));
    }

    #[test]
    fn unknown_code_has_no_neighbours() {
        let table = BoundaryTable::builtin();
        assert!(neighbors(&table, RegionCode(4242)).is_empty());
        assert!(neighbors(&table, special::ANONYMOUS).is_empty());
    }

    #[test]
    fn latency_from_centroid_distance() {
        let table = BoundaryTable::builtin();
        // Centroids (50.5, -2.5) and (37, -75): about 5770 km
        assert_eq!(estimate_latency_ms(&table, europe::WEST, north_america::USA_EAST), Some(577));
        assert_eq!(estimate_latency_ms(&table, europe::WEST, europe::CENTRAL), Some(124));
        assert_eq!(estimate_latency_ms(&table, europe::WEST, europe::WEST), Some(0));
    }

    #[test]
    fn latency_is_symmetric() {
        let table = BoundaryTable::builtin();
        assert_eq!(
            estimate_latency_ms(&table, asia::EAST_COAST, north_america::USA_WEST),
            estimate_latency_ms(&table, north_america::USA_WEST, asia::EAST_COAST),
        );
    }

    #[test]
    fn latency_needs_both_boxes() {
        let table = BoundaryTable::builtin();
        assert_eq!(estimate_latency_ms(&table, europe::WEST, special::ANONYMOUS), None);
        assert_eq!(estimate_latency_ms(&BoundaryTable::empty(), europe::WEST, europe::WEST), None);
    }
}
