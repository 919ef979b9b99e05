//! Cities and known road distances used by the carbon estimator

use serde::{Deserialize, Serialize};

/// A shipping origin or destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Normalized identifier (lowercase ASCII, digits, `-`, `_`)
    pub city_id: String,
    pub name: String,
    #[serde(default)]
    pub province: String,
    /// Degrees, [-90, 90]
    pub latitude: f64,
    /// Degrees, [-180, 180]
    pub longitude: f64,
}

impl City {
    pub fn new(
        city_id: impl Into<String>,
        name: impl Into<String>,
        province: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            city_id: city_id.into(),
            name: name.into(),
            province: province.into(),
            latitude,
            longitude,
        }
    }
}

/// A precomputed road distance between two cities
///
/// Entries are symmetric: one row covers both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDistance {
    pub origin_id: String,
    pub destination_id: String,
    pub distance_km: f64,
}

impl RouteDistance {
    pub fn new(origin_id: impl Into<String>, destination_id: impl Into<String>, distance_km: f64) -> Self {
        Self {
            origin_id: origin_id.into(),
            destination_id: destination_id.into(),
            distance_km,
        }
    }

    /// True when this entry connects `a` and `b` in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.origin_id == a && self.destination_id == b)
            || (self.origin_id == b && self.destination_id == a)
    }
}

/// Normalize a location identifier: trim and ASCII-lowercase
///
/// Returns `None` for identifiers that are empty or contain anything other
/// than ASCII alphanumerics, `-` and `_`.
pub fn normalize_location_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_location_id() {
        assert_eq!(normalize_location_id(" Jakarta "), Some("jakarta".to_string()));
        assert_eq!(normalize_location_id("kab-bogor_2"), Some("kab-bogor_2".to_string()));
        assert_eq!(normalize_location_id(""), None);
        assert_eq!(normalize_location_id("   "), None);
        assert_eq!(normalize_location_id("jakarta selatan"), None);
        assert_eq!(normalize_location_id("bandung;drop"), None);
    }

    #[test]
    fn test_route_connects_both_directions() {
        let route = RouteDistance::new("jakarta", "bandung", 150.0);
        assert!(route.connects("jakarta", "bandung"));
        assert!(route.connects("bandung", "jakarta"));
        assert!(!route.connects("jakarta", "surabaya"));
    }
}
