//! Major airport hubs and nearest-hub lookup.
//!
//! Distances here are great-circle kilometres, unlike the classifier's
//! degree-space fallback.

use serde::Serialize;

use crate::distance::great_circle_distance;
use crate::geometry::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Airport {
    /// IATA code.
    pub code: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Airport {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

const fn hub(code: &'static str, name: &'static str, lat: f64, lng: f64) -> Airport {
    Airport { code, name, lat, lng }
}

#[rustfmt::skip]
pub const MAJOR_AIRPORTS: &[Airport] = &[
    // North America
    hub("RDU", "Raleigh-Durham International",      35.8801,  -78.7880),
    hub("ATL", "Hartsfield-Jackson Atlanta",        33.6407,  -84.4277),
    hub("JFK", "John F. Kennedy International",     40.6413,  -73.7781),
    hub("LAX", "Los Angeles International",         33.9416, -118.4085),
    hub("ORD", "Chicago O'Hare International",      41.9742,  -87.9073),
    hub("DFW", "Dallas/Fort Worth International",   32.8998,  -97.0403),
    hub("DEN", "Denver International",              39.8561, -104.6737),
    hub("CLT", "Charlotte Douglas International",   35.2144,  -80.9473),

    // International hubs
    hub("LHR", "London Heathrow",                   51.4700,   -0.4543),
    hub("CDG", "Paris Charles de Gaulle",           49.0097,    2.5479),
    hub("HND", "Tokyo Haneda",                      35.5494,  139.7798),
    hub("PEK", "Beijing Capital",                   40.0799,  116.6031),
    hub("DXB", "Dubai International",               25.2532,   55.3657),
    hub("SYD", "Sydney Kingsford Smith",           -33.9399,  151.1753),
    hub("GRU", "São Paulo Guarulhos",              -23.4356,  -46.4731),
    hub("JNB", "Johannesburg O.R. Tambo",          -26.1367,   28.2425),
];

/// The closest hub and its distance in km. Ties keep the earlier entry.
pub fn nearest_airport(lat: f64, lng: f64) -> (&'static Airport, f64) {
    let here = Coordinate::new(lat, lng);
    let first = &MAJOR_AIRPORTS[0];
    let init = (first, great_circle_distance(here, first.location()));

    MAJOR_AIRPORTS[1..].iter().fold(init, |best, airport| {
        let distance = great_circle_distance(here, airport.location());
        if distance < best.1 { (airport, distance) } else { best }
    })
}

/// Look up a hub by IATA code, case-insensitively.
pub fn airport_by_code(code: &str) -> Option<&'static Airport> {
    MAJOR_AIRPORTS
        .iter()
        .find(|airport| airport.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_hubs() {
        assert_eq!(MAJOR_AIRPORTS.len(), 16);
    }

    #[test]
    fn nearest_to_cities() {
        assert_eq!(nearest_airport(35.7796, -78.6382).0.code, "RDU"); // Raleigh
        assert_eq!(nearest_airport(48.8566, 2.3522).0.code, "CDG"); // Paris
        assert_eq!(nearest_airport(51.5074, -0.1278).0.code, "LHR"); // London
        assert_eq!(nearest_airport(-37.8136, 144.9631).0.code, "SYD"); // Melbourne
        assert_eq!(nearest_airport(37.7749, -122.4194).0.code, "LAX"); // San Francisco
    }

    #[test]
    fn distance_at_the_hub_is_zero() {
        let (airport, km) = nearest_airport(40.6413, -73.7781);
        assert_eq!(airport.code, "JFK");
        assert!(km < 1e-6);
    }

    #[test]
    fn uses_great_circle_not_degrees() {
        // Across the antimeridian from Sydney the great circle still finds SYD
        let (airport, km) = nearest_airport(-33.9, -179.0);
        assert_eq!(airport.code, "SYD");
        assert!(km < 3_500.0, "{}", km);
    }

    #[test]
    fn by_code() {
        assert_eq!(airport_by_code("hnd").map(|a| a.name), Some("Tokyo Haneda"));
        assert!(airport_by_code("XXX").is_none());
    }
}
