//! Emission factors and comparison constants
//!
//! Freight factors are published per tonne-kilometre; the estimator works per
//! kilogram-kilometre, so every factor is divided by 1,000 before use.

use serde::{Deserialize, Serialize};

use crate::models::footprint::TransportMode;

/// Emission configuration
///
/// All values are policy parameters supplied with the reference data;
/// defaults are average freight figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionConfig {
    /// kg CO2 per tonne-km for road freight (default: 0.105)
    pub road_kg_per_tonne_km: f64,

    /// kg CO2 per tonne-km for rail freight (default: 0.028)
    pub rail_kg_per_tonne_km: f64,

    /// kg CO2 per tonne-km for sea freight (default: 0.016)
    pub sea_kg_per_tonne_km: f64,

    /// kg CO2 per tonne-km for air freight (default: 0.602)
    pub air_kg_per_tonne_km: f64,

    /// Multiplier from great-circle to road distance (default: 1.3)
    ///
    /// Only applied when a route is missing from the route table and the
    /// distance falls back to haversine between city coordinates.
    pub road_circuity_factor: f64,

    /// Distance assumed for same-city deliveries (default: 15 km)
    pub intra_city_km: f64,

    /// kg CO2 to produce one 500 ml PET bottle (default: 0.0828)
    pub kg_per_plastic_bottle: f64,

    /// kg CO2 for one full smartphone charge (default: 0.00822)
    pub kg_per_smartphone_charge: f64,

    /// kg CO2 per km driven by an average passenger car (default: 0.192)
    pub kg_per_car_km: f64,
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            road_kg_per_tonne_km: 0.105,
            rail_kg_per_tonne_km: 0.028,
            sea_kg_per_tonne_km: 0.016,
            air_kg_per_tonne_km: 0.602,
            road_circuity_factor: 1.3,
            intra_city_km: 15.0,
            kg_per_plastic_bottle: 0.0828,
            kg_per_smartphone_charge: 0.00822,
            kg_per_car_km: 0.192,
        }
    }
}

impl EmissionConfig {
    /// kg CO2 emitted moving one kilogram one kilometre
    pub fn kg_per_kg_km(&self, mode: TransportMode) -> f64 {
        let per_tonne_km = match mode {
            TransportMode::Road => self.road_kg_per_tonne_km,
            TransportMode::Rail => self.rail_kg_per_tonne_km,
            TransportMode::Sea => self.sea_kg_per_tonne_km,
            TransportMode::Air => self.air_kg_per_tonne_km,
        };
        per_tonne_km / 1000.0
    }

    /// Check every factor is usable
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let non_negative = [
            ("road_kg_per_tonne_km", self.road_kg_per_tonne_km),
            ("rail_kg_per_tonne_km", self.rail_kg_per_tonne_km),
            ("sea_kg_per_tonne_km", self.sea_kg_per_tonne_km),
            ("air_kg_per_tonne_km", self.air_kg_per_tonne_km),
            ("intra_city_km", self.intra_city_km),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", field, value));
            }
        }

        if !self.road_circuity_factor.is_finite() || self.road_circuity_factor < 1.0 {
            return Err(format!(
                "road_circuity_factor must be >= 1.0, got {}",
                self.road_circuity_factor
            ));
        }

        let positive = [
            ("kg_per_plastic_bottle", self.kg_per_plastic_bottle),
            ("kg_per_smartphone_charge", self.kg_per_smartphone_charge),
            ("kg_per_car_km", self.kg_per_car_km),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be positive, got {}", field, value));
            }
        }

        Ok(())
    }
}
