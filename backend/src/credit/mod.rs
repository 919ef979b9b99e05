//! Credit / risk scoring
//!
//! - `policy`: risk thresholds, account-age saturation, pay-later limits
//! - `scoring`: factor scaling and the clamped 850-point score
//! - `history`: immutable snapshots and append-only score history

pub mod history;
pub mod policy;
pub mod scoring;

// Re-exports
pub use history::{CreditError, CreditScoreSnapshot, ScoreHistory};
pub use policy::{PayLaterLimits, RiskThresholds, ScoringPolicy};
pub use scoring::{compute_factors, compute_score};
