//! Route distance resolution
//!
//! Order of precedence:
//! 1. Same city: configured intra-city distance
//! 2. Route table entry (either direction)
//! 3. Haversine between city coordinates, scaled by road circuity
//!
//! Either city missing from the table is a lookup miss (`None`).

use crate::carbon::emission::EmissionConfig;
use crate::models::footprint::DistanceSource;
use crate::models::location::{City, RouteDistance};

/// Mean Earth radius (IUGG), km
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two coordinates, km
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}

/// Resolve the distance between two normalized city ids
pub fn resolve_distance(
    cities: &[City],
    routes: &[RouteDistance],
    emission: &EmissionConfig,
    origin_id: &str,
    destination_id: &str,
) -> Option<(f64, DistanceSource)> {
    let origin = cities.iter().find(|c| c.city_id == origin_id)?;
    let destination = cities.iter().find(|c| c.city_id == destination_id)?;

    if origin.city_id == destination.city_id {
        return Some((emission.intra_city_km, DistanceSource::IntraCity));
    }

    if let Some(route) = routes.iter().find(|r| r.connects(origin_id, destination_id)) {
        return Some((route.distance_km, DistanceSource::RouteTable));
    }

    let straight = haversine_km(
        origin.latitude,
        origin.longitude,
        destination.latitude,
        destination.longitude,
    );
    Some((straight * emission.road_circuity_factor, DistanceSource::GreatCircle))
}
