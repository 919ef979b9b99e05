//! Carbon footprint estimator
//!
//! - `emission`: freight emission factors and comparison constants
//! - `distance`: route table / great-circle distance resolution
//! - `estimator`: emission estimate and relatable comparisons

pub mod distance;
pub mod emission;
pub mod estimator;

// Re-exports
pub use distance::{haversine_km, resolve_distance};
pub use emission::EmissionConfig;
pub use estimator::{
    compare_modes, comparisons, estimate_footprint, estimate_footprint_with_mode, CarbonError,
};
