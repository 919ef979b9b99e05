//! Domain models for the calculation core

pub mod credit;
pub mod fee_tier;
pub mod footprint;
pub mod location;
pub mod pricing;

// Re-exports
pub use credit::{CreditScore, CreditScoreFactors, OrderMetrics, RiskCategory};
pub use fee_tier::{FeeTier, MarketplacePlatform};
pub use footprint::{Comparison, ComparisonKind, DistanceSource, FootprintResult, TransportMode};
pub use location::{normalize_location_id, City, RouteDistance};
pub use pricing::{PricingError, PricingInput, PricingResult, MAX_AMOUNT};
