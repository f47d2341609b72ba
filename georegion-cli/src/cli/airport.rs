//! Airport command implementation.

use anyhow::Result;
use serde::Serialize;

use georegion::{nearest_airport, Airport};

use super::common::print_json;

#[derive(Serialize)]
struct JsonAirport {
    #[serde(flatten)]
    airport: Airport,
    distance_km: f64,
}

/// Execute the airport command: nearest major hub to a coordinate.
pub fn cmd_airport(lat: f64, lng: f64, json: bool) -> Result<()> {
    let (airport, distance_km) = nearest_airport(lat, lng);

    if json {
        return print_json(&JsonAirport { airport: *airport, distance_km });
    }

    println!("{} {} ({:.1} km)", airport.code, airport.name, distance_km);
    Ok(())
}
