//! The fixed region code namespace.
//!
//! Codes are grouped by thousand: the thousands digit is the category
//! (ocean basins, a continent, or the special/fallback block). Nothing
//! creates a code at runtime; classification only ever picks one of the
//! constants below.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A leaf region code.
///
/// Stored as `u32` so the classifier never has to narrow anything. The
/// 16-bit narrowing belongs to [`crate::identifier`] alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCode(pub u32);

/// Top-level block a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Major,
    NorthAmerica,
    Asia,
    Europe,
    Africa,
    SouthAmerica,
    Oceania,
    Special,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Major => "MAJOR",
            Category::NorthAmerica => "NORTH_AMERICA",
            Category::Asia => "ASIA",
            Category::Europe => "EUROPE",
            Category::Africa => "AFRICA",
            Category::SouthAmerica => "SOUTH_AMERICA",
            Category::Oceania => "OCEANIA",
            Category::Special => "SPECIAL",
        }
    }
}

pub mod major {
    use super::RegionCode;
    pub const NORTH_PACIFIC: RegionCode = RegionCode(1000);
    pub const SOUTH_PACIFIC: RegionCode = RegionCode(1001);
    pub const NORTH_ATLANTIC: RegionCode = RegionCode(1002);
    pub const SOUTH_ATLANTIC: RegionCode = RegionCode(1003);
    pub const INDIAN_OCEAN: RegionCode = RegionCode(1004);
    pub const ARCTIC: RegionCode = RegionCode(1005);
    pub const ANTARCTIC: RegionCode = RegionCode(1006);
}

pub mod north_america {
    use super::RegionCode;
    /// Western Canada and Alaska
    pub const CANADA_WEST: RegionCode = RegionCode(2000);
    pub const CANADA_EAST: RegionCode = RegionCode(2001);
    /// Pacific coast and mountain states
    pub const USA_WEST: RegionCode = RegionCode(2010);
    /// Central states ("Midwest")
    pub const USA_CENTRAL: RegionCode = RegionCode(2011);
    pub const USA_EAST: RegionCode = RegionCode(2012);
    pub const MEXICO: RegionCode = RegionCode(2020);
}

pub mod asia {
    use super::RegionCode;
    /// Coastal China, Korea, Japan
    pub const EAST_COAST: RegionCode = RegionCode(3000);
    pub const CHINA_INLAND: RegionCode = RegionCode(3001);
    pub const SOUTH_EAST: RegionCode = RegionCode(3010);
    pub const INDIA_NORTH: RegionCode = RegionCode(3020);
    pub const INDIA_SOUTH: RegionCode = RegionCode(3021);
    pub const CENTRAL: RegionCode = RegionCode(3030);
    pub const MONGOLIA: RegionCode = RegionCode(3031);
    pub const MIDDLE_EAST: RegionCode = RegionCode(3040);
    pub const RUSSIA_WEST: RegionCode = RegionCode(3050);
    pub const RUSSIA_CENTRAL: RegionCode = RegionCode(3051);
    pub const RUSSIA_EAST: RegionCode = RegionCode(3052);
}

pub mod europe {
    use super::RegionCode;
    /// UK, France, Benelux
    pub const WEST: RegionCode = RegionCode(4000);
    pub const CENTRAL: RegionCode = RegionCode(4001);
    pub const SOUTH: RegionCode = RegionCode(4002);
    /// Nordics and Baltics
    pub const NORTH: RegionCode = RegionCode(4003);
    pub const EAST: RegionCode = RegionCode(4004);
}

pub mod africa {
    use super::RegionCode;
    /// Mediterranean coast
    pub const NORTH: RegionCode = RegionCode(5000);
    pub const WEST: RegionCode = RegionCode(5001);
    pub const EAST: RegionCode = RegionCode(5002);
    pub const CENTRAL: RegionCode = RegionCode(5003);
    pub const SOUTH: RegionCode = RegionCode(5004);
    pub const SAHARA: RegionCode = RegionCode(5005);
}

pub mod south_america {
    use super::RegionCode;

    pub mod brazil {
        use super::RegionCode;
        pub const NORTH: RegionCode = RegionCode(6001);
        pub const SOUTH: RegionCode = RegionCode(6002);
        pub const AMAZON: RegionCode = RegionCode(6003);
    }

    pub const ANDES: RegionCode = RegionCode(6010);
    pub const SOUTHERN_CONE: RegionCode = RegionCode(6020);
    pub const CENTRAL: RegionCode = RegionCode(6030);
    pub const CARIBBEAN: RegionCode = RegionCode(6040);
}

pub mod oceania {
    use super::RegionCode;
    pub const AUSTRALIA: RegionCode = RegionCode(7000);
    pub const NEW_ZEALAND: RegionCode = RegionCode(7001);
    /// Melanesia, Micronesia and Polynesia
    pub const PACIFIC_ISLANDS: RegionCode = RegionCode(7002);
}

pub mod special {
    use super::RegionCode;
    /// Returned whenever nothing else can be decided.
    pub const ANONYMOUS: RegionCode = RegionCode(9000);
    pub const SATELLITE: RegionCode = RegionCode(9001);
    pub const MOBILE: RegionCode = RegionCode(9002);

    pub const PACIFIC_NORTHWEST: RegionCode = RegionCode(9300);
    pub const PACIFIC_NORTHEAST: RegionCode = RegionCode(9301);
    pub const PACIFIC_SOUTHWEST: RegionCode = RegionCode(9302);
    pub const PACIFIC_SOUTHEAST: RegionCode = RegionCode(9303);
    /// South-east Pacific, west of South America
    pub const PACIFIC_SOUTHEAST_DEEP: RegionCode = RegionCode(9305);
    pub const ATLANTIC_NORTHWEST: RegionCode = RegionCode(9310);
    pub const ATLANTIC_NORTHEAST: RegionCode = RegionCode(9311);
    pub const ATLANTIC_SOUTHWEST: RegionCode = RegionCode(9312);
    pub const ATLANTIC_SOUTHEAST: RegionCode = RegionCode(9313);
    pub const INDIAN_NORTH: RegionCode = RegionCode(9320);
    pub const INDIAN_SOUTH: RegionCode = RegionCode(9321);
}

/// Every code with its dotted path, in namespace order.
pub const ALL: &[(RegionCode, &str)] = &[
    (major::NORTH_PACIFIC, "MAJOR.NORTH_PACIFIC"),
    (major::SOUTH_PACIFIC, "MAJOR.SOUTH_PACIFIC"),
    (major::NORTH_ATLANTIC, "MAJOR.NORTH_ATLANTIC"),
    (major::SOUTH_ATLANTIC, "MAJOR.SOUTH_ATLANTIC"),
    (major::INDIAN_OCEAN, "MAJOR.INDIAN_OCEAN"),
    (major::ARCTIC, "MAJOR.ARCTIC"),
    (major::ANTARCTIC, "MAJOR.ANTARCTIC"),
    (north_america::CANADA_WEST, "NORTH_AMERICA.CANADA_WEST"),
    (north_america::CANADA_EAST, "NORTH_AMERICA.CANADA_EAST"),
    (north_america::USA_WEST, "NORTH_AMERICA.USA_WEST"),
    (north_america::USA_CENTRAL, "NORTH_AMERICA.USA_CENTRAL"),
    (north_america::USA_EAST, "NORTH_AMERICA.USA_EAST"),
    (north_america::MEXICO, "NORTH_AMERICA.MEXICO"),
    (asia::EAST_COAST, "ASIA.EAST_COAST"),
    (asia::CHINA_INLAND, "ASIA.CHINA_INLAND"),
    (asia::SOUTH_EAST, "ASIA.SOUTH_EAST"),
    (asia::INDIA_NORTH, "ASIA.INDIA_NORTH"),
    (asia::INDIA_SOUTH, "ASIA.INDIA_SOUTH"),
    (asia::CENTRAL, "ASIA.CENTRAL"),
    (asia::MONGOLIA, "ASIA.MONGOLIA"),
    (asia::MIDDLE_EAST, "ASIA.MIDDLE_EAST"),
    (asia::RUSSIA_WEST, "ASIA.RUSSIA_WEST"),
    (asia::RUSSIA_CENTRAL, "ASIA.RUSSIA_CENTRAL"),
    (asia::RUSSIA_EAST, "ASIA.RUSSIA_EAST"),
    (europe::WEST, "EUROPE.WEST"),
    (europe::CENTRAL, "EUROPE.CENTRAL"),
    (europe::SOUTH, "EUROPE.SOUTH"),
    (europe::NORTH, "EUROPE.NORTH"),
    (europe::EAST, "EUROPE.EAST"),
    (africa::NORTH, "AFRICA.NORTH"),
    (africa::WEST, "AFRICA.WEST"),
    (africa::EAST, "AFRICA.EAST"),
    (africa::CENTRAL, "AFRICA.CENTRAL"),
    (africa::SOUTH, "AFRICA.SOUTH"),
    (africa::SAHARA, "AFRICA.SAHARA"),
    (south_america::brazil::NORTH, "SOUTH_AMERICA.BRAZIL.NORTH"),
    (south_america::brazil::SOUTH, "SOUTH_AMERICA.BRAZIL.SOUTH"),
    (south_america::brazil::AMAZON, "SOUTH_AMERICA.BRAZIL.AMAZON"),
    (south_america::ANDES, "SOUTH_AMERICA.ANDES"),
    (south_america::SOUTHERN_CONE, "SOUTH_AMERICA.SOUTHERN_CONE"),
    (south_america::CENTRAL, "SOUTH_AMERICA.CENTRAL"),
    (south_america::CARIBBEAN, "SOUTH_AMERICA.CARIBBEAN"),
    (oceania::AUSTRALIA, "OCEANIA.AUSTRALIA"),
    (oceania::NEW_ZEALAND, "OCEANIA.NEW_ZEALAND"),
    (oceania::PACIFIC_ISLANDS, "OCEANIA.PACIFIC_ISLANDS"),
    (special::ANONYMOUS, "SPECIAL.ANONYMOUS"),
    (special::SATELLITE, "SPECIAL.SATELLITE"),
    (special::MOBILE, "SPECIAL.MOBILE"),
    (special::PACIFIC_NORTHWEST, "SPECIAL.PACIFIC_NORTHWEST"),
    (special::PACIFIC_NORTHEAST, "SPECIAL.PACIFIC_NORTHEAST"),
    (special::PACIFIC_SOUTHWEST, "SPECIAL.PACIFIC_SOUTHWEST"),
    (special::PACIFIC_SOUTHEAST, "SPECIAL.PACIFIC_SOUTHEAST"),
    (special::PACIFIC_SOUTHEAST_DEEP, "SPECIAL.PACIFIC_SOUTHEAST_DEEP"),
    (special::ATLANTIC_NORTHWEST, "SPECIAL.ATLANTIC_NORTHWEST"),
    (special::ATLANTIC_NORTHEAST, "SPECIAL.ATLANTIC_NORTHEAST"),
    (special::ATLANTIC_SOUTHWEST, "SPECIAL.ATLANTIC_SOUTHWEST"),
    (special::ATLANTIC_SOUTHEAST, "SPECIAL.ATLANTIC_SOUTHEAST"),
    (special::INDIAN_NORTH, "SPECIAL.INDIAN_NORTH"),
    (special::INDIAN_SOUTH, "SPECIAL.INDIAN_SOUTH"),
];

impl RegionCode {
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Find a code in the fixed namespace.
    pub fn lookup(value: u32) -> Option<Self> {
        ALL.iter().map(|(code, _)| *code).find(|code| code.0 == value)
    }

    /// Find a code by dotted path (`EUROPE.WEST`). Case-insensitive.
    pub fn by_path(path: &str) -> Option<Self> {
        ALL.iter()
            .find(|(_, p)| p.eq_ignore_ascii_case(path))
            .map(|(code, _)| *code)
    }

    pub fn is_known(self) -> bool {
        Self::lookup(self.0).is_some()
    }

    /// Dotted path, or `None` outside the namespace.
    pub fn path(self) -> Option<&'static str> {
        ALL.iter().find(|(code, _)| *code == self).map(|(_, p)| *p)
    }

    /// Human-readable hierarchy, e.g. `NORTH_AMERICA > USA_WEST`.
    pub fn display_name(self) -> String {
        match self.path() {
            Some(path) => path.split('.').collect::<Vec<_>>().join(" > "),
            None => "Unknown Region".to_string(),
        }
    }

    pub fn category(self) -> Option<Category> {
        match self.0 / 1000 {
            1 => Some(Category::Major),
            2 => Some(Category::NorthAmerica),
            3 => Some(Category::Asia),
            4 => Some(Category::Europe),
            5 => Some(Category::Africa),
            6 => Some(Category::SouthAmerica),
            7 => Some(Category::Oceania),
            9 => Some(Category::Special),
            _ => None,
        }
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<RegionCode> for u32 {
    fn from(code: RegionCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let values: HashSet<u32> = ALL.iter().map(|(c, _)| c.0).collect();
        assert_eq!(values.len(), ALL.len());

        let paths: HashSet<&str> = ALL.iter().map(|(_, p)| *p).collect();
        assert_eq!(paths.len(), ALL.len());
    }

    #[test]
    fn codes_fit_the_namespace() {
        for (code, path) in ALL {
            assert!(code.0 <= 9999, "{} out of range", path);
            let category = code.category().expect("every code has a category");
            assert!(
                path.starts_with(category.name()),
                "{} does not sit under {}",
                path,
                category.name()
            );
        }
    }

    #[test]
    fn lookup_and_path() {
        assert_eq!(RegionCode::lookup(2010), Some(north_america::USA_WEST));
        assert_eq!(RegionCode::lookup(1234), None);
        assert_eq!(north_america::USA_WEST.path(), Some("NORTH_AMERICA.USA_WEST"));
        assert_eq!(
            RegionCode::by_path("south_america.brazil.amazon"),
            Some(south_america::brazil::AMAZON)
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(
            south_america::brazil::NORTH.display_name(),
            "SOUTH_AMERICA > BRAZIL > NORTH"
        );
        assert_eq!(RegionCode(42).display_name(), "Unknown Region");
        assert_eq!(special::ANONYMOUS.to_string(), "9000");
    }
}
