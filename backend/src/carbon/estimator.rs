//! Carbon footprint estimator
//!
//! `emission_kg = distance_km * weight_kg * factor(mode)`
//!
//! An unknown route is an expected outcome (`Ok(None)`): the caller hides the
//! footprint panel and carries on with the rest of the rate comparison. Only
//! malformed input is an error.

use thiserror::Error;

use crate::carbon::distance::resolve_distance;
use crate::carbon::emission::EmissionConfig;
use crate::core::money::format_decimal;
use crate::models::footprint::{Comparison, ComparisonKind, FootprintResult, TransportMode};
use crate::models::location::normalize_location_id;
use crate::reference::ReferenceData;

/// Errors for malformed estimator input
#[derive(Debug, Error, PartialEq)]
pub enum CarbonError {
    #[error("Invalid location identifier: '{0}'")]
    InvalidLocation(String),

    #[error("Weight must be positive, got {0} g")]
    InvalidWeight(u64),
}

/// Estimate the footprint of a road shipment
///
/// # Returns
/// - `Ok(Some(result))` when the route resolves
/// - `Ok(None)` when either city is unknown
///
/// # Errors
/// `CarbonError::InvalidLocation` for an empty or malformed identifier,
/// `CarbonError::InvalidWeight` for a zero weight.
///
/// # Example
/// ```
/// use cekkirim_core_rs::{estimate_footprint, ReferenceData};
///
/// let reference = ReferenceData::default();
/// let result = estimate_footprint(&reference, "jakarta", "bandung", 2_000).unwrap();
/// assert!(result.is_some());
///
/// let miss = estimate_footprint(&reference, "jakarta", "atlantis", 2_000).unwrap();
/// assert!(miss.is_none());
/// ```
pub fn estimate_footprint(
    reference: &ReferenceData,
    origin_id: &str,
    destination_id: &str,
    weight_grams: u64,
) -> Result<Option<FootprintResult>, CarbonError> {
    estimate_footprint_with_mode(
        reference,
        origin_id,
        destination_id,
        weight_grams,
        TransportMode::default(),
    )
}

/// Estimate the footprint for a specific transport mode
pub fn estimate_footprint_with_mode(
    reference: &ReferenceData,
    origin_id: &str,
    destination_id: &str,
    weight_grams: u64,
    mode: TransportMode,
) -> Result<Option<FootprintResult>, CarbonError> {
    let origin = normalize_location_id(origin_id)
        .ok_or_else(|| CarbonError::InvalidLocation(origin_id.to_string()))?;
    let destination = normalize_location_id(destination_id)
        .ok_or_else(|| CarbonError::InvalidLocation(destination_id.to_string()))?;
    if weight_grams == 0 {
        return Err(CarbonError::InvalidWeight(weight_grams));
    }

    let Some((distance_km, distance_source)) = resolve_distance(
        &reference.cities,
        &reference.routes,
        &reference.emission,
        &origin,
        &destination,
    ) else {
        tracing::debug!(origin = %origin, destination = %destination, "no distance for route");
        return Ok(None);
    };

    let weight_kg = weight_grams as f64 / 1000.0;
    let emission_kg = distance_km * weight_kg * reference.emission.kg_per_kg_km(mode);

    Ok(Some(FootprintResult {
        origin_id: origin,
        destination_id: destination,
        mode,
        distance_km,
        distance_source,
        weight_kg,
        emission_kg,
        comparisons: comparisons(emission_kg, &reference.emission),
    }))
}

/// One estimate per transport mode, cleanest first
///
/// Returns `Ok(None)` on a lookup miss, like [`estimate_footprint`].
pub fn compare_modes(
    reference: &ReferenceData,
    origin_id: &str,
    destination_id: &str,
    weight_grams: u64,
) -> Result<Option<Vec<FootprintResult>>, CarbonError> {
    let mut results = Vec::with_capacity(TransportMode::ALL.len());
    for mode in TransportMode::ALL {
        match estimate_footprint_with_mode(reference, origin_id, destination_id, weight_grams, mode)? {
            Some(result) => results.push(result),
            None => return Ok(None),
        }
    }
    results.sort_by(|a, b| a.emission_kg.total_cmp(&b.emission_kg));
    Ok(Some(results))
}

/// Relatable equivalents for an emission
pub fn comparisons(emission_kg: f64, config: &EmissionConfig) -> Vec<Comparison> {
    let bottles = round2(emission_kg / config.kg_per_plastic_bottle);
    let charges = round2(emission_kg / config.kg_per_smartphone_charge);
    let car_km = round2(emission_kg / config.kg_per_car_km);

    vec![
        Comparison {
            kind: ComparisonKind::PlasticBottles,
            quantity: bottles,
            label: format!("Setara {} botol plastik 500 ml", format_decimal(bottles, 2)),
        },
        Comparison {
            kind: ComparisonKind::SmartphoneCharges,
            quantity: charges,
            label: format!("Setara {} kali mengisi daya smartphone", format_decimal(charges, 2)),
        },
        Comparison {
            kind: ComparisonKind::CarKilometres,
            quantity: car_km,
            label: format!("Setara {} km perjalanan mobil", format_decimal(car_km, 2)),
        },
    ]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
