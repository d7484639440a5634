//! Built-in named download zones.
//!
//! Zones are preset bounding boxes for areas that get fetched often, so
//! a run can be started by name instead of four coordinates. Lookup is
//! case-sensitive and matches the short name exactly.

use crate::coord::GeoBounds;

/// A named geographic area with preset bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    name: &'static str,
    display_name: &'static str,
    bounds: GeoBounds,
}

impl Zone {
    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable name shown in listings and summaries.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// The zone's bounding box.
    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }
}

static ZONES: [Zone; 3] = [
    Zone {
        name: "mediterranee",
        display_name: "Méditerranée (France)",
        bounds: GeoBounds {
            min_lat: 42.0,
            max_lat: 44.0,
            min_lon: 3.0,
            max_lon: 7.0,
        },
    },
    Zone {
        name: "toulon",
        display_name: "Toulon",
        bounds: GeoBounds {
            min_lat: 43.0,
            max_lat: 43.2,
            min_lon: 5.8,
            max_lon: 6.1,
        },
    },
    Zone {
        name: "marseille",
        display_name: "Marseille",
        bounds: GeoBounds {
            min_lat: 43.2,
            max_lat: 43.4,
            min_lon: 5.3,
            max_lon: 5.5,
        },
    },
];

/// Look up a zone by its short name.
pub fn find(name: &str) -> Option<&'static Zone> {
    ZONES.iter().find(|zone| zone.name == name)
}

/// All built-in zones, in listing order.
pub fn all() -> &'static [Zone] {
    &ZONES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_zone() {
        let zone = find("toulon").unwrap();

        assert_eq!(zone.name(), "toulon");
        assert_eq!(zone.display_name(), "Toulon");
        assert_eq!(
            zone.bounds(),
            GeoBounds {
                min_lat: 43.0,
                max_lat: 43.2,
                min_lon: 5.8,
                max_lon: 6.1,
            }
        );
    }

    #[test]
    fn test_find_unknown_zone() {
        assert!(find("atlantis").is_none());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        assert!(find("Toulon").is_none());
    }

    #[test]
    fn test_all_zones_in_listing_order() {
        let names: Vec<&str> = all().iter().map(|z| z.name()).collect();
        assert_eq!(names, vec!["mediterranee", "toulon", "marseille"]);
    }

    #[test]
    fn test_every_zone_has_valid_bounds() {
        for zone in all() {
            assert!(
                zone.bounds().validate().is_ok(),
                "zone '{}' has invalid bounds",
                zone.name()
            );
        }
    }
}
