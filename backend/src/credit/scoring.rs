//! Credit score calculator
//!
//! Each factor is scaled independently onto its ceiling, the factors are
//! summed, and the total is clamped to [0, 850]. Every mapping is monotonic:
//! a better input never lowers the score, and a higher dispute rate never
//! raises it.

use crate::credit::policy::ScoringPolicy;
use crate::models::credit::{
    CreditScore, CreditScoreFactors, OrderMetrics, RiskCategory, ACCOUNT_AGE_CEILING,
    DISPUTE_CEILING, MAX_SCORE, ORDER_SUCCESS_CEILING, PAYMENT_HISTORY_CEILING,
};

/// Score a subject's order history
///
/// Returns `None` when there is no history yet (`total_orders == 0`); callers
/// show "score not yet available" rather than a zero.
///
/// # Example
/// ```
/// use cekkirim_core_rs::{compute_score, OrderMetrics, RiskCategory, ScoringPolicy};
///
/// let metrics = OrderMetrics {
///     total_orders: 240,
///     success_rate: 100.0,
///     dispute_rate: 0.0,
///     payment_reliability: 100.0,
///     account_age_days: 400,
/// };
/// let score = compute_score(&metrics, &ScoringPolicy::default()).unwrap();
/// assert_eq!(score.score(), 850);
/// assert_eq!(score.category(), RiskCategory::Excellent);
/// ```
pub fn compute_score(metrics: &OrderMetrics, policy: &ScoringPolicy) -> Option<CreditScore> {
    if !metrics.has_history() {
        tracing::debug!("no order history, score not available");
        return None;
    }

    let factors = compute_factors(metrics, policy);
    let total = factors.total().clamp(0.0, MAX_SCORE as f64);
    let score = total.round() as u16;
    let category = RiskCategory::from_score(score, &policy.thresholds);

    Some(CreditScore::new(score, category, factors))
}

/// Scale each input onto its factor ceiling
pub fn compute_factors(metrics: &OrderMetrics, policy: &ScoringPolicy) -> CreditScoreFactors {
    let success = rate_fraction(metrics.success_rate, 0.0);
    let dispute = rate_fraction(metrics.dispute_rate, 1.0);
    let payment = rate_fraction(metrics.payment_reliability, 0.0);

    let saturation = policy.account_age_saturation_days.max(1) as f64;
    let age = (metrics.account_age_days as f64 / saturation).min(1.0);

    CreditScoreFactors {
        order_success: success * ORDER_SUCCESS_CEILING,
        dispute: (1.0 - dispute) * DISPUTE_CEILING,
        payment_history: payment * PAYMENT_HISTORY_CEILING,
        account_age: age * ACCOUNT_AGE_CEILING,
    }
}

/// Percentage in [0, 100] as a fraction in [0, 1]
///
/// NaN maps to `nan_fraction`, which callers set to the least favourable end
/// of the factor so an unknown rate never earns points.
fn rate_fraction(rate: f64, nan_fraction: f64) -> f64 {
    if rate.is_nan() {
        return nan_fraction;
    }
    rate.clamp(0.0, 100.0) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(success: f64, dispute: f64, payment: f64, age_days: u32) -> OrderMetrics {
        OrderMetrics {
            total_orders: 50,
            success_rate: success,
            dispute_rate: dispute,
            payment_reliability: payment,
            account_age_days: age_days,
        }
    }

    #[test]
    fn test_no_history_is_none_not_zero() {
        let empty = OrderMetrics {
            success_rate: 100.0,
            payment_reliability: 100.0,
            account_age_days: 1000,
            ..Default::default()
        };
        assert!(compute_score(&empty, &ScoringPolicy::default()).is_none());
    }

    #[test]
    fn test_factor_scaling() {
        let factors = compute_factors(&metrics(50.0, 20.0, 75.0, 73), &ScoringPolicy::default());
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(factors.order_success, 170.0));
        assert!(close(factors.dispute, 204.0));
        assert!(close(factors.payment_history, 127.5));
        assert!(close(factors.account_age, 17.0));
    }

    #[test]
    fn test_worst_case_scores_zero() {
        let score = compute_score(&metrics(0.0, 100.0, 0.0, 0), &ScoringPolicy::default()).unwrap();
        assert_eq!(score.score(), 0);
        assert_eq!(score.category(), RiskCategory::Poor);
    }

    #[test]
    fn test_extreme_inputs_are_clamped() {
        let policy = ScoringPolicy::default();
        let high = compute_score(&metrics(1000.0, -500.0, 1e300, u32::MAX), &policy).unwrap();
        assert_eq!(high.score(), 850);

        let low = compute_score(&metrics(-1000.0, 1000.0, f64::NEG_INFINITY, 0), &policy).unwrap();
        assert_eq!(low.score(), 0);
    }

    #[test]
    fn test_nan_rates_count_as_worst_value() {
        let policy = ScoringPolicy::default();
        let score = compute_score(&metrics(f64::NAN, f64::NAN, f64::NAN, 0), &policy).unwrap();
        assert_eq!(score.score(), 0);
        assert_eq!(score.factors().dispute, 0.0);

        let nan_dispute = compute_factors(&metrics(90.0, f64::NAN, 90.0, 30), &policy);
        let full_dispute = compute_factors(&metrics(90.0, 100.0, 90.0, 30), &policy);
        assert_eq!(nan_dispute, full_dispute);
    }

    #[test]
    fn test_category_from_total() {
        // 0.9*340 + 0.95*255 + 0.9*170 + 1.0*85 = 306 + 242.25 + 153 + 85 = 786.25
        let score = compute_score(&metrics(90.0, 5.0, 90.0, 365), &ScoringPolicy::default()).unwrap();
        assert_eq!(score.score(), 786);
        assert_eq!(score.category(), RiskCategory::Excellent);
    }
}
