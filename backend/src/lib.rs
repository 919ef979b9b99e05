//! CekKirim Calculation Core
//!
//! Pure, deterministic calculators behind the CekKirim shipping and
//! marketplace tools.
//!
//! # Architecture
//!
//! - **core**: Money representation and id-ID display formatting
//! - **models**: Domain types (FeeTier, PricingResult, FootprintResult, CreditScore)
//! - **reference**: Host-supplied reference data (fee tiers, cities, policies)
//! - **pricing**: Marketplace fee calculator and comparison
//! - **carbon**: Carbon footprint estimator
//! - **credit**: Credit / risk scoring and score history
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole rupiah)
//! 2. Calculators never mutate reference data and perform no I/O
//! 3. "Unknown route" and "no credit history" are `None`, never errors

// Module declarations
pub mod carbon;
pub mod core;
pub mod credit;
pub mod models;
pub mod pricing;
pub mod reference;

// Re-exports for convenience
pub use carbon::{
    compare_modes, estimate_footprint, estimate_footprint_with_mode, CarbonError, EmissionConfig,
};
pub use credit::{
    compute_score, CreditError, CreditScoreSnapshot, PayLaterLimits, RiskThresholds, ScoreHistory,
    ScoringPolicy,
};
pub use models::{
    credit::{CreditScore, CreditScoreFactors, OrderMetrics, RiskCategory},
    fee_tier::{FeeTier, MarketplacePlatform},
    footprint::{Comparison, ComparisonKind, DistanceSource, FootprintResult, TransportMode},
    location::{City, RouteDistance},
    pricing::{PricingError, PricingInput, PricingResult},
};
pub use pricing::{
    break_even_price, compare_platforms, compute_pricing, price_for_target_margin, PricingDisplay,
    TierQuote,
};
pub use reference::{ReferenceData, ReferenceError};
