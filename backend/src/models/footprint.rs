//! Carbon footprint result types

use serde::{Deserialize, Serialize};

/// How a parcel travels between two cities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// Truck / van linehaul (the default for domestic parcels)
    #[default]
    Road,
    Rail,
    Sea,
    Air,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Road,
        TransportMode::Rail,
        TransportMode::Sea,
        TransportMode::Air,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Road => "road",
            TransportMode::Rail => "rail",
            TransportMode::Sea => "sea",
            TransportMode::Air => "air",
        }
    }
}

/// Where the distance in a footprint came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceSource {
    /// Precomputed road distance from the route table
    RouteTable,
    /// Haversine distance scaled by the road circuity factor
    GreatCircle,
    /// Origin and destination are the same city
    IntraCity,
}

/// Everyday quantity an emission is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonKind {
    PlasticBottles,
    SmartphoneCharges,
    CarKilometres,
}

/// "Equivalent to X ..." line shown under the footprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub kind: ComparisonKind,
    /// Rounded to two decimals
    pub quantity: f64,
    /// Indonesian display text
    pub label: String,
}

/// Estimated emission for one shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub origin_id: String,
    pub destination_id: String,
    pub mode: TransportMode,
    pub distance_km: f64,
    pub distance_source: DistanceSource,
    pub weight_kg: f64,
    pub emission_kg: f64,
    pub comparisons: Vec<Comparison>,
}

impl FootprintResult {
    /// Emission in grams, convenient for small parcels
    pub fn emission_grams(&self) -> f64 {
        self.emission_kg * 1000.0
    }
}
