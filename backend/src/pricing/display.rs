//! Display formatting for pricing results
//!
//! The pricing card shows every amount as an id-ID rupiah string. Parsing the
//! strings back yields the same totals, so a rendered result can be read back
//! (e.g. from a copied table) without drift.

use serde::{Deserialize, Serialize};

use crate::core::money::{format_percent, format_rupiah, parse_percent, parse_rupiah, FormatError};
use crate::models::pricing::PricingResult;

/// A `PricingResult` rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingDisplay {
    pub sale_price: String,
    pub cost_basis: String,
    pub admin_fee: String,
    pub payment_fee: String,
    pub free_shipping_fee: String,
    pub total_deduction: String,
    pub net_payout: String,
    pub net_profit: String,
    pub margin_percent: String,
}

impl PricingResult {
    /// Render every field in id-ID format
    pub fn display(&self) -> PricingDisplay {
        PricingDisplay {
            sale_price: format_rupiah(self.sale_price),
            cost_basis: format_rupiah(self.cost_basis),
            admin_fee: format_rupiah(self.admin_fee),
            payment_fee: format_rupiah(self.payment_fee),
            free_shipping_fee: format_rupiah(self.free_shipping_fee),
            total_deduction: format_rupiah(self.total_deduction),
            net_payout: format_rupiah(self.net_payout),
            net_profit: format_rupiah(self.net_profit),
            margin_percent: format_percent(self.margin_percent),
        }
    }
}

impl PricingDisplay {
    /// Re-parse the displayed fields
    ///
    /// Money fields round-trip exactly. The margin comes back at the two
    /// decimals it was displayed with.
    pub fn parse_totals(&self) -> Result<PricingResult, FormatError> {
        Ok(PricingResult {
            sale_price: parse_rupiah(&self.sale_price)?,
            cost_basis: parse_rupiah(&self.cost_basis)?,
            admin_fee: parse_rupiah(&self.admin_fee)?,
            payment_fee: parse_rupiah(&self.payment_fee)?,
            free_shipping_fee: parse_rupiah(&self.free_shipping_fee)?,
            total_deduction: parse_rupiah(&self.total_deduction)?,
            net_payout: parse_rupiah(&self.net_payout)?,
            net_profit: parse_rupiah(&self.net_profit)?,
            margin_percent: parse_percent(&self.margin_percent)?,
        })
    }
}
