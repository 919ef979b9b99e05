//! Integration tests for credit scoring
//!
//! Tests cover:
//! - No history vs. low score
//! - Monotonicity of every factor
//! - Clamping into [0, 850] for extreme input
//! - Unknown (NaN) rates scored as the worst value
//! - Custom policies, pay-later limits, snapshot history

use cekkirim_core_rs::{
    compute_score, OrderMetrics, RiskCategory, RiskThresholds, ScoreHistory, ScoringPolicy,
};
use proptest::prelude::*;

/// Helper to create metrics with some history
fn metrics(success: f64, dispute: f64, payment: f64, age_days: u32) -> OrderMetrics {
    OrderMetrics {
        total_orders: 120,
        success_rate: success,
        dispute_rate: dispute,
        payment_reliability: payment,
        account_age_days: age_days,
    }
}

fn score_of(m: &OrderMetrics) -> u16 {
    compute_score(m, &ScoringPolicy::default()).unwrap().score()
}

// ============================================================================
// Availability
// ============================================================================

#[test]
fn test_no_history_is_distinct_from_low_score() {
    let policy = ScoringPolicy::default();

    let fresh = OrderMetrics::default();
    assert!(compute_score(&fresh, &policy).is_none());

    let bad = metrics(0.0, 100.0, 0.0, 0);
    let score = compute_score(&bad, &policy).unwrap();
    assert_eq!(score.score(), 0);
    assert_eq!(score.category(), RiskCategory::Poor);
}

#[test]
fn test_perfect_record() {
    let score = compute_score(&metrics(100.0, 0.0, 100.0, 730), &ScoringPolicy::default()).unwrap();
    assert_eq!(score.score(), 850);
    assert_eq!(score.category(), RiskCategory::Excellent);
    assert_eq!(score.factors().order_success, 340.0);
    assert_eq!(score.factors().dispute, 255.0);
    assert_eq!(score.factors().payment_history, 170.0);
    assert_eq!(score.factors().account_age, 85.0);
}

#[test]
fn test_typical_categories() {
    // 0.8*340 + 0.9*255 + 0.7*170 + 0.5*85 = 272 + 229.5 + 119 + 42.5 = 663
    let good = score_of(&metrics(80.0, 10.0, 70.0, 182));
    assert!((662..=664).contains(&good));
    assert_eq!(
        RiskCategory::from_score(good, &RiskThresholds::default()),
        RiskCategory::Good
    );

    // 0.6*340 + 0.7*255 + 0.5*170 + 0 = 204 + 178.5 + 85 = 467.5
    let fair = compute_score(&metrics(60.0, 30.0, 50.0, 0), &ScoringPolicy::default()).unwrap();
    assert_eq!(fair.category(), RiskCategory::Fair);
}

#[test]
fn test_unknown_rates_never_earn_points() {
    let unknown_dispute = score_of(&metrics(95.0, f64::NAN, 95.0, 200));
    assert_eq!(unknown_dispute, score_of(&metrics(95.0, 100.0, 95.0, 200)));
    assert!(unknown_dispute < score_of(&metrics(95.0, 0.0, 95.0, 200)));

    let unknown_success = score_of(&metrics(f64::NAN, 5.0, 95.0, 200));
    assert_eq!(unknown_success, score_of(&metrics(0.0, 5.0, 95.0, 200)));

    let unknown_payment = score_of(&metrics(95.0, 5.0, f64::NAN, 200));
    assert_eq!(unknown_payment, score_of(&metrics(95.0, 5.0, 0.0, 200)));
}

// ============================================================================
// Policy
// ============================================================================

#[test]
fn test_custom_thresholds_change_category() {
    let strict = ScoringPolicy {
        thresholds: RiskThresholds {
            excellent: 840,
            good: 780,
            fair: 700,
        },
        ..Default::default()
    };
    strict.validate().unwrap();

    let score = compute_score(&metrics(90.0, 5.0, 90.0, 365), &strict).unwrap();
    assert_eq!(score.score(), 786);
    assert_eq!(score.category(), RiskCategory::Good);
}

#[test]
fn test_account_age_saturation_from_policy() {
    let policy = ScoringPolicy {
        account_age_saturation_days: 730,
        ..Default::default()
    };
    let score = compute_score(&metrics(100.0, 0.0, 100.0, 365), &policy).unwrap();
    // half the age points: 765 + 42.5 = 807.5 -> 808
    assert_eq!(score.score(), 808);
}

#[test]
fn test_pay_later_limits() {
    let policy = ScoringPolicy::default();
    assert_eq!(RiskCategory::Excellent.pay_later_limit(&policy.pay_later_limits), 10_000_000);
    assert_eq!(RiskCategory::Poor.pay_later_limit(&policy.pay_later_limits), 0);
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_score_change_appends_new_snapshot() {
    let policy = ScoringPolicy::default();
    let mut history = ScoreHistory::new("seller-42");

    let before = compute_score(&metrics(70.0, 10.0, 80.0, 100), &policy).unwrap();
    let first = before.snapshot("seller-42", &policy).unwrap();
    history.record(first.clone()).unwrap();

    let after = compute_score(&metrics(95.0, 2.0, 99.0, 400), &policy).unwrap();
    history.record(after.snapshot("seller-42", &policy).unwrap()).unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history.snapshots()[0], first);
    assert!(history.delta().unwrap() > 0);
}

#[test]
fn test_snapshot_serializes() {
    let policy = ScoringPolicy::default();
    let snapshot = compute_score(&metrics(90.0, 1.0, 95.0, 200), &policy)
        .unwrap()
        .snapshot("buyer-7", &policy)
        .unwrap();

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"category\":\"EXCELLENT\"") || json.contains("\"category\":\"GOOD\""));
    let restored: cekkirim_core_rs::CreditScoreSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.id(), snapshot.id());
    assert_eq!(restored.score(), snapshot.score());
    assert_eq!(restored.category(), snapshot.category());
    assert_eq!(restored.policy_fingerprint(), snapshot.policy_fingerprint());
}

// ============================================================================
// Properties
// ============================================================================

fn rate() -> impl Strategy<Value = f64> {
    -50.0f64..=150.0
}

proptest! {
    #[test]
    fn prop_score_clamped(
        success in prop::num::f64::ANY,
        dispute in prop::num::f64::ANY,
        payment in prop::num::f64::ANY,
        age in any::<u32>(),
    ) {
        let score = compute_score(&metrics(success, dispute, payment, age), &ScoringPolicy::default()).unwrap();
        prop_assert!(score.score() <= 850);
    }

    #[test]
    fn prop_success_rate_monotonic(a in rate(), b in rate(), d in rate(), p in rate(), age in 0u32..2000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(score_of(&metrics(lo, d, p, age)) <= score_of(&metrics(hi, d, p, age)));
    }

    #[test]
    fn prop_payment_reliability_monotonic(a in rate(), b in rate(), s in rate(), d in rate(), age in 0u32..2000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(score_of(&metrics(s, d, lo, age)) <= score_of(&metrics(s, d, hi, age)));
    }

    #[test]
    fn prop_account_age_monotonic(a in 0u32..5000, b in 0u32..5000, s in rate(), d in rate(), p in rate()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(score_of(&metrics(s, d, p, lo)) <= score_of(&metrics(s, d, p, hi)));
    }

    #[test]
    fn prop_dispute_rate_never_raises_score(a in rate(), b in rate(), s in rate(), p in rate(), age in 0u32..2000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(score_of(&metrics(s, hi, p, age)) <= score_of(&metrics(s, lo, p, age)));
    }
}
