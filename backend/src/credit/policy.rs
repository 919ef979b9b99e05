//! Scoring policy: risk cut points, account-age saturation, pay-later limits
//!
//! These are business parameters owned by the host's configuration, not
//! derived here. Defaults: >=750 Excellent, >=600 Good, >=450 Fair.

use serde::{Deserialize, Serialize};

use crate::models::credit::MAX_SCORE;
use crate::reference::fingerprint::compute_fingerprint;
use crate::reference::ReferenceError;

/// Minimum score for each category above Poor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub excellent: u16,
    pub good: u16,
    pub fair: u16,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            excellent: 750,
            good: 600,
            fair: 450,
        }
    }
}

/// Recommended "pay later" credit line per category (whole rupiah)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLaterLimits {
    pub excellent: i64,
    pub good: i64,
    pub fair: i64,
    pub poor: i64,
}

impl Default for PayLaterLimits {
    fn default() -> Self {
        Self {
            excellent: 10_000_000,
            good: 5_000_000,
            fair: 2_000_000,
            poor: 0,
        }
    }
}

/// Complete scoring policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Stamped on every snapshot so scores from different policies are not
    /// compared blindly
    #[serde(default = "default_policy_version")]
    pub version: String,

    /// Account age earning full age points (default: 365 days)
    #[serde(default = "default_account_age_saturation_days")]
    pub account_age_saturation_days: u32,

    #[serde(default)]
    pub thresholds: RiskThresholds,

    #[serde(default)]
    pub pay_later_limits: PayLaterLimits,
}

fn default_policy_version() -> String {
    "2024.1".to_string()
}

fn default_account_age_saturation_days() -> u32 {
    365
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            version: default_policy_version(),
            account_age_saturation_days: default_account_age_saturation_days(),
            thresholds: RiskThresholds::default(),
            pay_later_limits: PayLaterLimits::default(),
        }
    }
}

impl ScoringPolicy {
    pub fn validate(&self) -> Result<(), ReferenceError> {
        let invalid = |msg: String| Err(ReferenceError::Invalid(format!("scoring: {}", msg)));

        if self.version.trim().is_empty() {
            return invalid("version must not be empty".to_string());
        }
        if self.account_age_saturation_days == 0 {
            return invalid("account_age_saturation_days must be positive".to_string());
        }

        let t = &self.thresholds;
        if !(t.excellent > t.good && t.good > t.fair) {
            return invalid(format!(
                "thresholds must be strictly descending, got excellent={} good={} fair={}",
                t.excellent, t.good, t.fair
            ));
        }
        if t.excellent > MAX_SCORE {
            return invalid(format!(
                "excellent threshold {} exceeds maximum score {}",
                t.excellent, MAX_SCORE
            ));
        }

        let l = &self.pay_later_limits;
        if l.poor < 0 || l.fair < l.poor || l.good < l.fair || l.excellent < l.good {
            return invalid("pay_later_limits must be non-negative and non-decreasing by category".to_string());
        }

        Ok(())
    }

    /// SHA-256 of the canonical JSON form of this policy
    pub fn fingerprint(&self) -> Result<String, ReferenceError> {
        compute_fingerprint(self)
    }
}
