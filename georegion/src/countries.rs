//! Country id -> code rule mapping for polygon features.
//!
//! Feature ids are the ISO 3166-1 alpha-3 codes used by the usual world
//! boundary GeoJSON sets. USA and Canada are split by longitude; countries
//! that straddle several region boxes (China, India, Russia, Brazil, ...)
//! and ids not listed here resolve through the region table.

use crate::boundary::{CodeRule, LongitudeCut};
use crate::codes::{africa, asia, europe, major, north_america, oceania, south_america, RegionCode};

/// USA: west of -115 is West, west of -98 is Central, the rest East.
pub fn usa_rule() -> CodeRule {
    CodeRule::LongitudeSplit {
        cuts: vec![
            LongitudeCut { below: -115.0, code: north_america::USA_WEST },
            LongitudeCut { below: -98.0, code: north_america::USA_CENTRAL },
        ],
        otherwise: north_america::USA_EAST,
    }
}

/// Canada: west of -100 is West, the rest East.
pub fn canada_rule() -> CodeRule {
    CodeRule::LongitudeSplit {
        cuts: vec![LongitudeCut { below: -100.0, code: north_america::CANADA_WEST }],
        otherwise: north_america::CANADA_EAST,
    }
}

#[rustfmt::skip]
const FIXED: &[(&str, RegionCode)] = &[
    ("MEX", north_america::MEXICO),

    // Central America and the Caribbean
    ("GTM", south_america::CARIBBEAN), ("BLZ", south_america::CARIBBEAN),
    ("HND", south_america::CARIBBEAN), ("SLV", south_america::CARIBBEAN),
    ("NIC", south_america::CARIBBEAN), ("CRI", south_america::CARIBBEAN),
    ("PAN", south_america::CARIBBEAN), ("CUB", south_america::CARIBBEAN),
    ("HTI", south_america::CARIBBEAN), ("DOM", south_america::CARIBBEAN),
    ("JAM", south_america::CARIBBEAN), ("PRI", south_america::CARIBBEAN),
    ("BHS", south_america::CARIBBEAN), ("TTO", south_america::CARIBBEAN),

    // South America
    ("COL", south_america::ANDES), ("VEN", south_america::ANDES),
    ("ECU", south_america::ANDES), ("PER", south_america::ANDES),
    ("BOL", south_america::ANDES),
    ("ARG", south_america::SOUTHERN_CONE), ("CHL", south_america::SOUTHERN_CONE),
    ("URY", south_america::SOUTHERN_CONE), ("PRY", south_america::SOUTHERN_CONE),
    ("GUY", south_america::CENTRAL), ("SUR", south_america::CENTRAL),

    // Europe
    ("GBR", europe::WEST), ("IRL", europe::WEST), ("FRA", europe::WEST),
    ("BEL", europe::WEST), ("NLD", europe::WEST), ("LUX", europe::WEST),
    ("DEU", europe::CENTRAL), ("POL", europe::CENTRAL), ("CZE", europe::CENTRAL),
    ("AUT", europe::CENTRAL), ("CHE", europe::CENTRAL), ("HUN", europe::CENTRAL),
    ("SVK", europe::CENTRAL),
    ("ESP", europe::SOUTH), ("PRT", europe::SOUTH), ("ITA", europe::SOUTH),
    ("GRC", europe::SOUTH), ("HRV", europe::SOUTH), ("SVN", europe::SOUTH),
    ("SRB", europe::SOUTH), ("BIH", europe::SOUTH), ("MNE", europe::SOUTH),
    ("ALB", europe::SOUTH), ("MKD", europe::SOUTH), ("BGR", europe::SOUTH),
    ("ROU", europe::SOUTH),
    ("NOR", europe::NORTH), ("SWE", europe::NORTH), ("FIN", europe::NORTH),
    ("DNK", europe::NORTH), ("ISL", europe::NORTH), ("EST", europe::NORTH),
    ("LVA", europe::NORTH), ("LTU", europe::NORTH),
    ("UKR", europe::EAST), ("BLR", europe::EAST), ("MDA", europe::EAST),

    // Asia
    ("JPN", asia::EAST_COAST), ("KOR", asia::EAST_COAST), ("PRK", asia::EAST_COAST),
    ("TWN", asia::EAST_COAST),
    ("VNM", asia::SOUTH_EAST), ("THA", asia::SOUTH_EAST), ("LAO", asia::SOUTH_EAST),
    ("KHM", asia::SOUTH_EAST), ("MMR", asia::SOUTH_EAST), ("MYS", asia::SOUTH_EAST),
    ("IDN", asia::SOUTH_EAST), ("PHL", asia::SOUTH_EAST),
    ("PAK", asia::INDIA_NORTH), ("NPL", asia::INDIA_NORTH), ("BGD", asia::INDIA_NORTH),
    ("BTN", asia::INDIA_NORTH),
    ("LKA", asia::INDIA_SOUTH),
    ("KAZ", asia::CENTRAL), ("UZB", asia::CENTRAL), ("TKM", asia::CENTRAL),
    ("KGZ", asia::CENTRAL), ("TJK", asia::CENTRAL), ("AFG", asia::CENTRAL),
    ("MNG", asia::MONGOLIA),
    ("SAU", asia::MIDDLE_EAST), ("ARE", asia::MIDDLE_EAST), ("IRN", asia::MIDDLE_EAST),
    ("IRQ", asia::MIDDLE_EAST), ("SYR", asia::MIDDLE_EAST), ("JOR", asia::MIDDLE_EAST),
    ("ISR", asia::MIDDLE_EAST), ("LBN", asia::MIDDLE_EAST), ("TUR", asia::MIDDLE_EAST),
    ("YEM", asia::MIDDLE_EAST), ("OMN", asia::MIDDLE_EAST), ("KWT", asia::MIDDLE_EAST),
    ("QAT", asia::MIDDLE_EAST),

    // Africa
    ("EGY", africa::NORTH), ("LBY", africa::NORTH), ("TUN", africa::NORTH),
    ("DZA", africa::NORTH), ("MAR", africa::NORTH),
    ("MRT", africa::SAHARA), ("MLI", africa::SAHARA), ("NER", africa::SAHARA),
    ("TCD", africa::SAHARA), ("SDN", africa::SAHARA),
    ("NGA", africa::WEST), ("GHA", africa::WEST), ("SEN", africa::WEST),
    ("CIV", africa::WEST), ("BFA", africa::WEST), ("GIN", africa::WEST),
    ("SLE", africa::WEST), ("LBR", africa::WEST), ("TGO", africa::WEST),
    ("BEN", africa::WEST),
    ("ETH", africa::EAST), ("KEN", africa::EAST), ("TZA", africa::EAST),
    ("UGA", africa::EAST), ("SOM", africa::EAST), ("ERI", africa::EAST),
    ("RWA", africa::EAST), ("BDI", africa::EAST), ("SSD", africa::EAST),
    ("COD", africa::CENTRAL), ("COG", africa::CENTRAL), ("CMR", africa::CENTRAL),
    ("CAF", africa::CENTRAL), ("GAB", africa::CENTRAL), ("GNQ", africa::CENTRAL),
    ("ZAF", africa::SOUTH), ("NAM", africa::SOUTH), ("BWA", africa::SOUTH),
    ("ZWE", africa::SOUTH), ("MOZ", africa::SOUTH), ("ZMB", africa::SOUTH),
    ("AGO", africa::SOUTH), ("MDG", africa::SOUTH), ("MWI", africa::SOUTH),
    ("LSO", africa::SOUTH), ("SWZ", africa::SOUTH),

    // Oceania
    ("AUS", oceania::AUSTRALIA), ("NZL", oceania::NEW_ZEALAND),
    ("PNG", oceania::PACIFIC_ISLANDS), ("FJI", oceania::PACIFIC_ISLANDS),
    ("SLB", oceania::PACIFIC_ISLANDS), ("VUT", oceania::PACIFIC_ISLANDS),
    ("NCL", oceania::PACIFIC_ISLANDS),

    // Polar
    ("GRL", major::ARCTIC), ("ATA", major::ANTARCTIC),
];

/// Rule for a feature id. Unknown ids resolve through the region table.
pub fn rule_for_country(id: &str) -> CodeRule {
    match id {
        "USA" => usa_rule(),
        "CAN" => canada_rule(),
        _ => FIXED
            .iter()
            .find(|(iso, _)| *iso == id)
            .map_or(CodeRule::Regional, |(_, code)| CodeRule::Fixed(*code)),
    }
}
