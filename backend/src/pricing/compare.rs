//! Marketplace comparison table
//!
//! Quotes the same sale on every tier of every marketplace so the seller can
//! see where a product nets the most.

use serde::{Deserialize, Serialize};

use crate::models::fee_tier::MarketplacePlatform;
use crate::models::pricing::{validate_amount, PricingError, PricingResult};
use crate::pricing::calculator::price_with_tier;

/// One row of the comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierQuote {
    pub platform_id: String,
    pub platform_name: String,
    pub tier_id: String,
    pub tier_name: String,
    pub result: PricingResult,
}

/// Price one sale across all platforms and tiers
///
/// Rows are ordered by net profit, highest first; ties keep a stable order by
/// platform id, then tier id.
///
/// # Errors
/// `PricingError::InvalidArgument` for invalid amounts or an invalid platform.
pub fn compare_platforms(
    platforms: &[MarketplacePlatform],
    sale_price: i64,
    cost_basis: i64,
) -> Result<Vec<TierQuote>, PricingError> {
    validate_amount("sale_price", sale_price)?;
    validate_amount("cost_basis", cost_basis)?;

    let mut quotes = Vec::new();
    for platform in platforms {
        platform.validate()?;
        for tier in platform.tiers() {
            quotes.push(TierQuote {
                platform_id: platform.platform_id().to_string(),
                platform_name: platform.name().to_string(),
                tier_id: tier.tier_id().to_string(),
                tier_name: tier.name().to_string(),
                result: price_with_tier(tier, sale_price, cost_basis),
            });
        }
    }

    quotes.sort_by(|a, b| {
        b.result
            .net_profit
            .cmp(&a.result.net_profit)
            .then_with(|| a.platform_id.cmp(&b.platform_id))
            .then_with(|| a.tier_id.cmp(&b.tier_id))
    });

    Ok(quotes)
}

/// The most profitable row, if any platform was supplied
pub fn best_quote(quotes: &[TierQuote]) -> Option<&TierQuote> {
    quotes.first()
}
