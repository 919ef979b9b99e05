//! Reference data bundle
//!
//! Everything the calculators read but never write: marketplace fee tiers,
//! cities and route distances, emission constants and the scoring policy.
//! The host loads it once at startup (from JSON or the built-in defaults)
//! and passes it by reference to every calculation.
//!
//! # Invariants (enforced by `validate`)
//!
//! - Platform ids are unique and every platform offers at least one tier
//! - Every tier percentage is within [0, 100]
//! - City ids are normalized and unique; coordinates are in range
//! - Routes connect two distinct known cities with a positive distance
//! - At most one route per city pair, in either direction

pub mod defaults;
pub mod fingerprint;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::carbon::emission::EmissionConfig;
use crate::credit::policy::ScoringPolicy;
use crate::models::fee_tier::{FeeTier, MarketplacePlatform};
use crate::models::location::{normalize_location_id, City, RouteDistance};

pub use fingerprint::compute_fingerprint;

/// Errors loading or validating reference data
#[derive(Debug, Error, PartialEq)]
pub enum ReferenceError {
    #[error("Failed to parse reference data: {0}")]
    Parse(String),

    #[error("Invalid reference data: {0}")]
    Invalid(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Host-supplied configuration for all calculators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub platforms: Vec<MarketplacePlatform>,

    #[serde(default)]
    pub cities: Vec<City>,

    #[serde(default)]
    pub routes: Vec<RouteDistance>,

    #[serde(default)]
    pub emission: EmissionConfig,

    #[serde(default)]
    pub scoring: ScoringPolicy,
}

impl Default for ReferenceData {
    /// Built-in Indonesian marketplaces, major cities and linehaul routes
    fn default() -> Self {
        Self {
            platforms: defaults::marketplace_platforms(),
            cities: defaults::cities(),
            routes: defaults::routes(),
            emission: EmissionConfig::default(),
            scoring: ScoringPolicy::default(),
        }
    }
}

impl ReferenceData {
    /// Parse and validate a JSON bundle
    ///
    /// Sections missing from the JSON fall back to empty lists (platforms,
    /// cities, routes) or the built-in constants (emission, scoring).
    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        let data: ReferenceData =
            serde_json::from_str(json).map_err(|e| ReferenceError::Parse(e.to_string()))?;
        data.validate()?;
        tracing::info!(
            platforms = data.platforms.len(),
            cities = data.cities.len(),
            routes = data.routes.len(),
            "reference data loaded"
        );
        Ok(data)
    }

    pub fn to_json_pretty(&self) -> Result<String, ReferenceError> {
        serde_json::to_string_pretty(self).map_err(|e| ReferenceError::Serialization(e.to_string()))
    }

    /// Check every invariant listed in the module docs
    pub fn validate(&self) -> Result<(), ReferenceError> {
        for (i, platform) in self.platforms.iter().enumerate() {
            platform
                .validate()
                .map_err(|e| ReferenceError::Invalid(e.to_string()))?;
            if self.platforms[..i]
                .iter()
                .any(|p| p.platform_id() == platform.platform_id())
            {
                return Err(ReferenceError::Invalid(format!(
                    "duplicate platform '{}'",
                    platform.platform_id()
                )));
            }
            for tier in platform.tiers() {
                if tier.total_percent() > 100.0 {
                    tracing::warn!(
                        platform_id = platform.platform_id(),
                        tier_id = tier.tier_id(),
                        total_percent = tier.total_percent(),
                        "tier deducts more than the sale price"
                    );
                }
            }
        }

        for (i, city) in self.cities.iter().enumerate() {
            if normalize_location_id(&city.city_id).as_deref() != Some(city.city_id.as_str()) {
                return Err(ReferenceError::Invalid(format!(
                    "city id '{}' is not normalized",
                    city.city_id
                )));
            }
            if self.cities[..i].iter().any(|c| c.city_id == city.city_id) {
                return Err(ReferenceError::Invalid(format!("duplicate city '{}'", city.city_id)));
            }
            if !(-90.0..=90.0).contains(&city.latitude) || !(-180.0..=180.0).contains(&city.longitude) {
                return Err(ReferenceError::Invalid(format!(
                    "city '{}' has out-of-range coordinates ({}, {})",
                    city.city_id, city.latitude, city.longitude
                )));
            }
        }

        for (i, route) in self.routes.iter().enumerate() {
            if route.origin_id == route.destination_id {
                return Err(ReferenceError::Invalid(format!(
                    "route {} -> {} connects a city to itself",
                    route.origin_id, route.destination_id
                )));
            }
            if self.routes[..i]
                .iter()
                .any(|r| r.connects(&route.origin_id, &route.destination_id))
            {
                return Err(ReferenceError::Invalid(format!(
                    "duplicate route {} -> {}",
                    route.origin_id, route.destination_id
                )));
            }
            for end in [&route.origin_id, &route.destination_id] {
                if self.city(end).is_none() {
                    return Err(ReferenceError::Invalid(format!(
                        "route {} -> {} references unknown city '{}'",
                        route.origin_id, route.destination_id, end
                    )));
                }
            }
            if !route.distance_km.is_finite() || route.distance_km <= 0.0 {
                return Err(ReferenceError::Invalid(format!(
                    "route {} -> {} must have a positive distance, got {}",
                    route.origin_id, route.destination_id, route.distance_km
                )));
            }
        }

        self.emission
            .validate()
            .map_err(|msg| ReferenceError::Invalid(format!("emission: {}", msg)))?;
        self.scoring.validate()?;

        Ok(())
    }

    pub fn platform(&self, platform_id: &str) -> Option<&MarketplacePlatform> {
        self.platforms.iter().find(|p| p.platform_id() == platform_id)
    }

    /// Look up a tier; `None` when either the platform or the tier is unknown
    pub fn tier(&self, platform_id: &str, tier_id: &str) -> Option<&FeeTier> {
        self.platform(platform_id)?.tier(tier_id)
    }

    pub fn city(&self, city_id: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.city_id == city_id)
    }

    /// SHA-256 of the canonical JSON form of the whole bundle
    pub fn fingerprint(&self) -> Result<String, ReferenceError> {
        compute_fingerprint(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bundle_validates() {
        assert!(ReferenceData::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_minimal() {
        let data = ReferenceData::from_json("{}").unwrap();
        assert!(data.platforms.is_empty());
        assert_eq!(data.emission, EmissionConfig::default());
        assert_eq!(data.scoring, ScoringPolicy::default());
    }

    #[test]
    fn test_from_json_parse_error() {
        assert!(matches!(ReferenceData::from_json("{not json"), Err(ReferenceError::Parse(_))));
    }

    #[test]
    fn test_rejects_platform_without_tiers() {
        let json = r#"{"platforms":[{"platform_id":"x","name":"X","tiers":[]}]}"#;
        assert!(matches!(ReferenceData::from_json(json), Err(ReferenceError::Invalid(_))));
    }

    #[test]
    fn test_rejects_route_to_unknown_city() {
        let data = ReferenceData {
            routes: vec![RouteDistance::new("jakarta", "atlantis", 10.0)],
            ..Default::default()
        };
        let err = data.validate().unwrap_err();
        assert!(matches!(err, ReferenceError::Invalid(msg) if msg.contains("atlantis")));
    }

    #[test]
    fn test_rejects_self_route() {
        let data = ReferenceData {
            routes: vec![RouteDistance::new("jakarta", "jakarta", 15.0)],
            ..Default::default()
        };
        let err = data.validate().unwrap_err();
        assert!(matches!(err, ReferenceError::Invalid(msg) if msg.contains("itself")));
    }

    #[test]
    fn test_rejects_duplicate_route_in_either_direction() {
        let mut data = ReferenceData::default();
        data.routes.push(RouteDistance::new("jakarta", "bandung", 180.0));
        let err = data.validate().unwrap_err();
        assert!(matches!(err, ReferenceError::Invalid(msg) if msg.contains("duplicate route")));

        let mut data = ReferenceData::default();
        data.routes.push(RouteDistance::new("bandung", "jakarta", 150.0));
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_rejects_unnormalized_city_id() {
        let data = ReferenceData {
            cities: vec![City::new("Jakarta", "Jakarta", "DKI Jakarta", -6.2, 106.8)],
            routes: vec![],
            ..Default::default()
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_platform() {
        let mut data = ReferenceData::default();
        let first = data.platforms[0].clone();
        data.platforms.push(first);
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_tier_lookup() {
        let data = ReferenceData::default();
        assert!(data.tier("shopee", "star").is_some());
        assert!(data.tier("shopee", "missing").is_none());
        assert!(data.tier("missing", "star").is_none());
    }
}
