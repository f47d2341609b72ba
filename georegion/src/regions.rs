//! Built-in region boxes.
//!
//! Order matters: classification takes the first box that contains the
//! point. Land regions come first, then the ocean sub-basins, and the
//! catch-all ocean basins and polar caps last. The polar caps make the
//! latitude coverage run the full [-90, 90].

use crate::boundary::{RegionBoundaryEntry, RegionBounds};
use crate::codes::{africa, asia, europe, major, north_america, oceania, south_america, special, RegionCode};

type Row = (&'static str, RegionBounds, RegionCode);

const fn b(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> RegionBounds {
    RegionBounds::new(min_lat, max_lat, min_lng, max_lng)
}

#[rustfmt::skip]
const BUILTIN: &[Row] = &[
    // North America
    ("NORTH_AMERICA.CANADA_WEST",   b(49.0, 75.0, -140.0, -100.0), north_america::CANADA_WEST),
    ("NORTH_AMERICA.CANADA_EAST",   b(45.0, 75.0, -100.0, -50.0),  north_america::CANADA_EAST),
    ("NORTH_AMERICA.USA_WEST",      b(30.0, 49.0, -125.0, -105.0), north_america::USA_WEST),
    ("NORTH_AMERICA.USA_CENTRAL",   b(25.0, 49.0, -105.0, -85.0),  north_america::USA_CENTRAL),
    ("NORTH_AMERICA.USA_EAST",      b(25.0, 49.0, -85.0, -65.0),   north_america::USA_EAST),
    ("NORTH_AMERICA.MEXICO",        b(14.0, 32.0, -120.0, -85.0),  north_america::MEXICO),

    // Asia
    ("ASIA.EAST_COAST",             b(20.0, 46.0, 115.0, 145.0),   asia::EAST_COAST),
    ("ASIA.CHINA_INLAND",           b(20.0, 45.0, 85.0, 115.0),    asia::CHINA_INLAND),
    ("ASIA.SOUTH_EAST",             b(-10.0, 23.0, 95.0, 140.0),   asia::SOUTH_EAST),
    ("ASIA.INDIA_NORTH",            b(20.0, 35.0, 68.0, 97.0),     asia::INDIA_NORTH),
    ("ASIA.INDIA_SOUTH",            b(8.0, 20.0, 72.0, 87.0),      asia::INDIA_SOUTH),
    ("ASIA.CENTRAL",                b(35.0, 45.0, 50.0, 90.0),     asia::CENTRAL),
    ("ASIA.MIDDLE_EAST",            b(12.0, 42.0, 35.0, 65.0),     asia::MIDDLE_EAST),

    // Europe
    ("EUROPE.WEST",                 b(43.0, 58.0, -10.0, 5.0),     europe::WEST),
    ("EUROPE.CENTRAL",              b(45.0, 55.0, 5.0, 25.0),      europe::CENTRAL),
    ("EUROPE.SOUTH",                b(36.0, 45.0, -10.0, 25.0),    europe::SOUTH),
    ("EUROPE.NORTH",                b(55.0, 71.0, 5.0, 30.0),      europe::NORTH),
    ("EUROPE.EAST",                 b(45.0, 60.0, 25.0, 40.0),     europe::EAST),

    // Africa
    ("AFRICA.NORTH",                b(20.0, 37.0, -17.0, 35.0),    africa::NORTH),
    ("AFRICA.WEST",                 b(4.0, 20.0, -17.0, 10.0),     africa::WEST),
    ("AFRICA.EAST",                 b(-12.0, 18.0, 30.0, 52.0),    africa::EAST),
    ("AFRICA.CENTRAL",              b(-5.0, 15.0, 8.0, 30.0),      africa::CENTRAL),
    ("AFRICA.SOUTH",                b(-35.0, -8.0, 10.0, 41.0),    africa::SOUTH),

    // South America
    ("SOUTH_AMERICA.BRAZIL.NORTH",  b(0.0, 5.0, -70.0, -35.0),     south_america::brazil::NORTH),
    ("SOUTH_AMERICA.BRAZIL.SOUTH",  b(-33.0, -15.0, -58.0, -35.0), south_america::brazil::SOUTH),
    ("SOUTH_AMERICA.BRAZIL.AMAZON", b(-15.0, 0.0, -70.0, -45.0),   south_america::brazil::AMAZON),
    ("SOUTH_AMERICA.ANDES",         b(-23.0, 12.0, -82.0, -65.0),  south_america::ANDES),
    ("SOUTH_AMERICA.SOUTHERN_CONE", b(-56.0, -23.0, -76.0, -53.0), south_america::SOUTHERN_CONE),
    ("SOUTH_AMERICA.CENTRAL",       b(-15.0, 12.0, -65.0, -45.0),  south_america::CENTRAL),
    ("SOUTH_AMERICA.CARIBBEAN",     b(10.0, 25.0, -85.0, -60.0),   south_america::CARIBBEAN),

    // Northern Eurasia and the Sahara sit behind the finer boxes above
    ("ASIA.RUSSIA_WEST",            b(45.0, 66.5, 20.0, 60.0),     asia::RUSSIA_WEST),
    ("ASIA.RUSSIA_CENTRAL",         b(45.0, 66.5, 60.0, 120.0),    asia::RUSSIA_CENTRAL),
    ("ASIA.RUSSIA_EAST",            b(45.0, 66.5, 120.0, 180.0),   asia::RUSSIA_EAST),
    ("ASIA.MONGOLIA",               b(41.5, 52.0, 87.0, 120.0),    asia::MONGOLIA),
    ("AFRICA.SAHARA",               b(15.0, 35.0, -17.0, 35.0),    africa::SAHARA),

    // Oceania
    ("OCEANIA.AUSTRALIA",           b(-45.0, -10.0, 112.0, 155.0), oceania::AUSTRALIA),
    ("OCEANIA.NEW_ZEALAND",         b(-48.0, -34.0, 165.0, 179.0), oceania::NEW_ZEALAND),
    ("OCEANIA.PACIFIC_ISLANDS",     b(-25.0, 0.0, 155.0, -150.0),  oceania::PACIFIC_ISLANDS),

    // Ocean sub-basins
    ("PACIFIC.NORTH_WEST",          b(0.0, 66.5, 140.0, 180.0),    special::PACIFIC_NORTHWEST),
    ("PACIFIC.NORTH_EAST",          b(0.0, 66.5, -180.0, -120.0),  special::PACIFIC_NORTHEAST),
    ("PACIFIC.CENTRAL_WEST",        b(-30.0, 0.0, 150.0, 180.0),   special::PACIFIC_SOUTHWEST),
    ("PACIFIC.CENTRAL_EAST",        b(-30.0, 0.0, -180.0, -120.0), special::PACIFIC_SOUTHEAST),
    ("PACIFIC.SOUTH_EAST_DEEP",     b(-60.0, 0.0, -120.0, -70.0),  special::PACIFIC_SOUTHEAST_DEEP),
    ("ATLANTIC.NORTH_WEST",         b(0.0, 66.5, -80.0, -40.0),    special::ATLANTIC_NORTHWEST),
    ("ATLANTIC.NORTH_EAST",         b(0.0, 66.5, -40.0, 0.0),      special::ATLANTIC_NORTHEAST),
    ("ATLANTIC.SOUTH_WEST",         b(-60.0, 0.0, -70.0, -20.0),   special::ATLANTIC_SOUTHWEST),
    ("ATLANTIC.SOUTH_EAST",         b(-60.0, 0.0, -20.0, 20.0),    special::ATLANTIC_SOUTHEAST),
    ("INDIAN.NORTH",                b(0.0, 30.0, 55.0, 100.0),     special::INDIAN_NORTH),
    ("INDIAN.SOUTH",                b(-60.0, 0.0, 20.0, 110.0),    special::INDIAN_SOUTH),

    // Ocean basins and polar caps
    ("MAJOR.NORTH_PACIFIC",         b(0.0, 66.5, 120.0, -120.0),   major::NORTH_PACIFIC),
    ("MAJOR.SOUTH_PACIFIC",         b(-60.0, 0.0, 120.0, -120.0),  major::SOUTH_PACIFIC),
    ("MAJOR.NORTH_ATLANTIC",        b(0.0, 66.5, -70.0, 20.0),     major::NORTH_ATLANTIC),
    ("MAJOR.SOUTH_ATLANTIC",        b(-60.0, 0.0, -70.0, 20.0),    major::SOUTH_ATLANTIC),
    ("MAJOR.INDIAN_OCEAN",          b(-60.0, 30.0, 20.0, 120.0),   major::INDIAN_OCEAN),
    ("MAJOR.ARCTIC",                b(66.5, 90.0, -180.0, 180.0),  major::ARCTIC),
    ("MAJOR.ANTARCTIC",             b(-90.0, -60.0, -180.0, 180.0), major::ANTARCTIC),
];

/// The built-in region boxes, in classification order.
pub fn builtin_regions() -> Vec<RegionBoundaryEntry> {
    BUILTIN
        .iter()
        .map(|&(name, bounds, code)| RegionBoundaryEntry::new(name, bounds, code))
        .collect()
}
