//! Marketplace fee calculator
//!
//! Pure functions over validated inputs. Each fee is rounded to the nearest
//! whole rupiah before summing, so `total_deduction` and `net_payout` are
//! exact integers.

use crate::core::money::round_rupiah;
use crate::models::fee_tier::FeeTier;
use crate::models::pricing::{validate_amount, PricingError, PricingInput, PricingResult, MAX_AMOUNT};

/// Tolerance when comparing a computed margin against a target
const MARGIN_EPSILON: f64 = 1e-9;

/// Largest distance between a payout and `price * keep` (three fees, each
/// rounded by at most half a rupiah)
const ROUNDING_SLACK: f64 = 1.5;

/// Widest price range `lowest_price_where` scans
///
/// Reached only when fees plus target margin leave less than about 0.0003%
/// of the price to the seller.
const MAX_SCAN_WINDOW: i64 = 1_000_000;

/// Compute fees, payout, profit and margin for one sale
///
/// # Example
/// ```
/// use cekkirim_core_rs::{compute_pricing, FeeTier, PricingInput};
///
/// let tier = FeeTier::new("star", "Star", 5.0, 2.0, Some(3.0)).unwrap();
/// let input = PricingInput::new(100_000, 50_000, tier).unwrap();
/// let result = compute_pricing(&input);
///
/// assert_eq!(result.total_deduction, 10_000);
/// assert_eq!(result.net_payout, 90_000);
/// assert_eq!(result.net_profit, 40_000);
/// assert_eq!(result.margin_percent, 40.0);
/// ```
pub fn compute_pricing(input: &PricingInput) -> PricingResult {
    price_with_tier(input.tier(), input.sale_price(), input.cost_basis())
}

/// Same as [`compute_pricing`] without building a `PricingInput`
///
/// Callers must already have validated the amounts and tier.
pub(crate) fn price_with_tier(tier: &FeeTier, sale_price: i64, cost_basis: i64) -> PricingResult {
    let admin_fee = percent_of(sale_price, tier.admin_fee_percent());
    let payment_fee = percent_of(sale_price, tier.payment_fee_percent());
    let free_shipping_fee = percent_of(sale_price, tier.free_shipping_fee_percent());

    let total_deduction = admin_fee + payment_fee + free_shipping_fee;
    let net_payout = sale_price - total_deduction;
    let net_profit = net_payout - cost_basis;

    let margin_percent = if sale_price > 0 {
        net_profit as f64 * 100.0 / sale_price as f64
    } else {
        0.0
    };

    PricingResult {
        sale_price,
        cost_basis,
        admin_fee,
        payment_fee,
        free_shipping_fee,
        total_deduction,
        net_payout,
        net_profit,
        margin_percent,
    }
}

fn percent_of(amount: i64, percent: f64) -> i64 {
    round_rupiah(amount as f64 * percent / 100.0)
}

/// Lowest sale price whose net payout covers `cost_basis`
///
/// The returned price `p` satisfies `net_profit(p) >= 0`, and every lower
/// price loses money. Because fees round separately, some prices above `p`
/// may still lose money.
///
/// Returns `Ok(None)` when the tier deducts 100% or more (no price can break
/// even), when it keeps too little of the price to search (see
/// `MAX_SCAN_WINDOW`), or when the answer would exceed [`MAX_AMOUNT`].
pub fn break_even_price(tier: &FeeTier, cost_basis: i64) -> Result<Option<i64>, PricingError> {
    validate_amount("cost_basis", cost_basis)?;
    tier.validate()?;

    lowest_price_where(tier, cost_basis, 0.0, |result| result.net_profit >= 0)
}

/// Lowest sale price reaching `target_margin_percent`
///
/// Returns `Ok(None)` when the tier's deductions plus the target margin reach
/// 100% (or leave too little of the price to search), or the answer would
/// exceed [`MAX_AMOUNT`].
///
/// # Errors
/// `PricingError::InvalidArgument` for a negative or non-finite target, or
/// invalid cost basis / tier.
pub fn price_for_target_margin(
    tier: &FeeTier,
    cost_basis: i64,
    target_margin_percent: f64,
) -> Result<Option<i64>, PricingError> {
    validate_amount("cost_basis", cost_basis)?;
    tier.validate()?;
    if !target_margin_percent.is_finite() || target_margin_percent < 0.0 {
        return Err(PricingError::InvalidArgument(format!(
            "target_margin_percent must be a non-negative number, got {}",
            target_margin_percent
        )));
    }

    lowest_price_where(tier, cost_basis, target_margin_percent, |result| {
        result.net_profit >= 0 && result.margin_percent + MARGIN_EPSILON >= target_margin_percent
    })
}

/// Scan the window of prices that can possibly qualify, lowest first
///
/// Per-fee rounding moves the payout by at most 1.5 rupiah from
/// `price * (1 - fees / 100)`, so net profit is not monotonic in price but
/// every qualifying price lies within a few rupiah-of-payout of the analytic
/// solution of `price * (1 - (fees + margin) / 100) >= cost`.
fn lowest_price_where<F>(
    tier: &FeeTier,
    cost_basis: i64,
    target_margin_percent: f64,
    meets: F,
) -> Result<Option<i64>, PricingError>
where
    F: Fn(&PricingResult) -> bool,
{
    let check = |price: i64| meets(&price_with_tier(tier, price, cost_basis));

    if check(0) {
        return Ok(Some(0));
    }

    let keep_fraction = 1.0 - (tier.total_percent() + target_margin_percent) / 100.0;
    if keep_fraction <= 0.0 {
        tracing::debug!(
            tier_id = tier.tier_id(),
            total_percent = tier.total_percent(),
            target_margin_percent,
            "no sale price can reach the target"
        );
        return Ok(None);
    }

    let cost = cost_basis as f64;
    // rounding bound plus float error on very large prices
    let slack = ROUNDING_SLACK + cost / keep_fraction * f64::EPSILON * 8.0;

    let lower = ((cost - slack) / (keep_fraction + MARGIN_EPSILON / 100.0)).floor() - 1.0;
    let upper = ((cost + slack) / keep_fraction).ceil() + 1.0;

    let start = lower.max(1.0);
    let end = upper.min(MAX_AMOUNT as f64);
    if start > end {
        return Ok(None);
    }
    if end - start > MAX_SCAN_WINDOW as f64 {
        tracing::debug!(
            tier_id = tier.tier_id(),
            keep_fraction,
            "sale price search window too wide, treating target as unreachable"
        );
        return Ok(None);
    }

    Ok((start as i64..=end as i64).find(|&price| check(price)))
}
