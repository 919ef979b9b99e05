//! Marketplace fee and pricing calculator
//!
//! - `calculator`: fee deduction, break-even and target-margin pricing
//! - `compare`: the same sale quoted across every marketplace tier
//! - `display`: id-ID rendering of results and parsing them back

pub mod calculator;
pub mod compare;
pub mod display;

// Re-exports
pub use calculator::{break_even_price, compute_pricing, price_for_target_margin};
pub use compare::{best_quote, compare_platforms, TierQuote};
pub use display::PricingDisplay;
