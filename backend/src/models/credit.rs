//! Credit score models
//!
//! Scores use an 850-point scale split over four weighted factors:
//!
//! | Factor          | Weight | Ceiling |
//! |-----------------|--------|---------|
//! | Order success   | 40%    | 340     |
//! | Dispute rate    | 30%    | 255     |
//! | Payment history | 20%    | 170     |
//! | Account age     | 10%    | 85      |

use serde::{Deserialize, Serialize};

use crate::credit::policy::{PayLaterLimits, RiskThresholds};

pub const MAX_SCORE: u16 = 850;
pub const ORDER_SUCCESS_CEILING: f64 = 340.0;
pub const DISPUTE_CEILING: f64 = 255.0;
pub const PAYMENT_HISTORY_CEILING: f64 = 170.0;
pub const ACCOUNT_AGE_CEILING: f64 = 85.0;

/// Aggregated order history for one seller or buyer
///
/// Supplied by the order-history store. Rates are percentages in [0, 100];
/// out-of-range or NaN rates are tolerated and clamped during scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderMetrics {
    /// Completed orders considered; zero means "no history yet"
    pub total_orders: u64,
    pub success_rate: f64,
    pub dispute_rate: f64,
    pub payment_reliability: f64,
    pub account_age_days: u32,
}

impl OrderMetrics {
    pub fn has_history(&self) -> bool {
        self.total_orders > 0
    }
}

/// Per-factor points, each already scaled to its ceiling
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditScoreFactors {
    pub order_success: f64,
    pub dispute: f64,
    pub payment_history: f64,
    pub account_age: f64,
}

impl CreditScoreFactors {
    pub fn total(&self) -> f64 {
        self.order_success + self.dispute + self.payment_history + self.account_age
    }
}

/// Coarse risk bucket derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl RiskCategory {
    /// Classify a score against the configured cut points
    pub fn from_score(score: u16, thresholds: &RiskThresholds) -> Self {
        if score >= thresholds.excellent {
            RiskCategory::Excellent
        } else if score >= thresholds.good {
            RiskCategory::Good
        } else if score >= thresholds.fair {
            RiskCategory::Fair
        } else {
            RiskCategory::Poor
        }
    }

    /// Indonesian label used on the score card
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Excellent => "Sangat Baik",
            RiskCategory::Good => "Baik",
            RiskCategory::Fair => "Cukup",
            RiskCategory::Poor => "Berisiko",
        }
    }

    /// Recommended "pay later" credit line for this category (whole rupiah)
    pub fn pay_later_limit(&self, limits: &PayLaterLimits) -> i64 {
        match self {
            RiskCategory::Excellent => limits.excellent,
            RiskCategory::Good => limits.good,
            RiskCategory::Fair => limits.fair,
            RiskCategory::Poor => limits.poor,
        }
    }
}

/// A computed score
///
/// Only produced by `credit::compute_score`; a subject without history gets
/// no `CreditScore` at all rather than a zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditScore {
    score: u16,
    category: RiskCategory,
    factors: CreditScoreFactors,
}

impl CreditScore {
    pub(crate) fn new(score: u16, category: RiskCategory, factors: CreditScoreFactors) -> Self {
        Self {
            score,
            category,
            factors,
        }
    }

    /// Total points, in [0, 850]
    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn category(&self) -> RiskCategory {
        self.category
    }

    pub fn factors(&self) -> &CreditScoreFactors {
        &self.factors
    }
}
