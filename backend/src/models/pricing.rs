//! Pricing input and result models
//!
//! A `PricingInput` is built fresh for every calculation and validated at
//! construction; the calculator itself never fails. A `PricingResult` is a
//! derived value and is never persisted.
//!
//! CRITICAL: All money values are i64 (whole rupiah)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::fee_tier::FeeTier;

/// Largest sale price or cost basis accepted (Rp 1 quadrillion)
///
/// Keeps every intermediate fee well inside the range where `f64` represents
/// whole rupiah exactly and where summing three fees cannot overflow `i64`.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Errors raised when pricing inputs violate the caller contract
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// One fee calculation request
///
/// # Example
/// ```
/// use cekkirim_core_rs::{FeeTier, PricingInput};
///
/// let tier = FeeTier::new("regular", "Regular", 5.0, 2.0, Some(3.0)).unwrap();
/// let input = PricingInput::new(100_000, 50_000, tier).unwrap();
/// assert_eq!(input.sale_price(), 100_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingInput {
    /// Listed sale price (whole rupiah)
    sale_price: i64,

    /// Cost of goods for one unit (whole rupiah)
    cost_basis: i64,

    /// Selected marketplace tier
    tier: FeeTier,
}

impl PricingInput {
    /// Create a validated pricing input
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` if either amount is negative or above
    /// [`MAX_AMOUNT`], or if the tier carries an out-of-range percentage.
    pub fn new(sale_price: i64, cost_basis: i64, tier: FeeTier) -> Result<Self, PricingError> {
        validate_amount("sale_price", sale_price)?;
        validate_amount("cost_basis", cost_basis)?;
        tier.validate()?;

        Ok(Self {
            sale_price,
            cost_basis,
            tier,
        })
    }

    pub fn sale_price(&self) -> i64 {
        self.sale_price
    }

    pub fn cost_basis(&self) -> i64 {
        self.cost_basis
    }

    pub fn tier(&self) -> &FeeTier {
        &self.tier
    }
}

pub(crate) fn validate_amount(field: &str, amount: i64) -> Result<(), PricingError> {
    if amount < 0 {
        return Err(PricingError::InvalidArgument(format!(
            "{} must be non-negative, got {}",
            field, amount
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(PricingError::InvalidArgument(format!(
            "{} exceeds maximum of {}, got {}",
            field, MAX_AMOUNT, amount
        )));
    }
    Ok(())
}

/// Outcome of a fee calculation
///
/// Invariants:
/// - `total_deduction == admin_fee + payment_fee + free_shipping_fee`
/// - `net_payout == sale_price - total_deduction`
/// - `net_profit == net_payout - cost_basis`
/// - `margin_percent == 0.0` when `sale_price == 0`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub sale_price: i64,
    pub cost_basis: i64,
    pub admin_fee: i64,
    pub payment_fee: i64,
    pub free_shipping_fee: i64,
    pub total_deduction: i64,
    pub net_payout: i64,
    /// Negative when the seller operates at a loss
    pub net_profit: i64,
    pub margin_percent: f64,
}

impl PricingResult {
    /// True when the sale does not cover its cost basis
    pub fn is_loss(&self) -> bool {
        self.net_profit < 0
    }
}
