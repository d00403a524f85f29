//! The fixed city list behind the bare `/time` command.
//!
//! Entries double as a geocoding shortcut: a query that exactly matches a
//! label resolves to these coordinates without a network call.

/// One entry of the default city table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultLocation {
    pub label: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// The fan-out list for the defaults command, in display order.
pub const DEFAULT_LOCATIONS: [DefaultLocation; 5] = [
    DefaultLocation { label: "Pacific", latitude: 47.6097, longitude: -122.3331 },
    DefaultLocation { label: "Eastern", latitude: 40.7127, longitude: -74.0059 },
    DefaultLocation { label: "UK", latitude: 51.5072, longitude: -0.1275 },
    DefaultLocation { label: "Berlin", latitude: 52.5167, longitude: 13.3833 },
    DefaultLocation { label: "India", latitude: 12.9667, longitude: 77.5667 },
];

/// Exact (case-sensitive) label lookup.
pub fn find(label: &str) -> Option<&'static DefaultLocation> {
    DEFAULT_LOCATIONS.iter().find(|entry| entry.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_label_returns_coordinates_verbatim() {
        let berlin = find("Berlin").unwrap();
        assert_eq!(berlin.latitude, 52.5167);
        assert_eq!(berlin.longitude, 13.3833);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        assert!(find("berlin").is_none());
        assert!(find("BERLIN").is_none());
        assert!(find("Berlin").is_some());
    }

    #[test]
    fn test_find_unknown_label() {
        assert!(find("Tokyo").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_table_labels_are_unique() {
        for (i, a) in DEFAULT_LOCATIONS.iter().enumerate() {
            for b in DEFAULT_LOCATIONS.iter().skip(i + 1) {
                assert_ne!(a.label, b.label);
            }
        }
    }
}
