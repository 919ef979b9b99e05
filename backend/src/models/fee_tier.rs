//! Marketplace fee schedules
//!
//! Each marketplace (Shopee, Tokopedia, ...) offers membership tiers, and each
//! tier deducts its own percentages from the sale price. Tiers are immutable
//! reference data: built once when reference data is loaded, never mutated.

use serde::{Deserialize, Serialize};

use crate::models::pricing::PricingError;

/// Fee percentages charged by one marketplace membership tier
///
/// All percentages are in [0, 100]. The free-shipping subsidy fee is optional
/// in serialized data and defaults to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeTier {
    tier_id: String,

    /// Display label shown in the tier selector
    #[serde(default)]
    name: String,

    admin_fee_percent: f64,
    payment_fee_percent: f64,

    /// Free-shipping program fee (0 when the seller has not opted in)
    #[serde(default)]
    free_shipping_fee_percent: f64,
}

impl FeeTier {
    /// Create a validated tier
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` when the id is empty or any percentage
    /// is non-finite or outside [0, 100].
    pub fn new(
        tier_id: impl Into<String>,
        name: impl Into<String>,
        admin_fee_percent: f64,
        payment_fee_percent: f64,
        free_shipping_fee_percent: Option<f64>,
    ) -> Result<Self, PricingError> {
        let tier = Self {
            tier_id: tier_id.into(),
            name: name.into(),
            admin_fee_percent,
            payment_fee_percent,
            free_shipping_fee_percent: free_shipping_fee_percent.unwrap_or(0.0),
        };
        tier.validate()?;
        Ok(tier)
    }

    /// Check the tier's invariants
    ///
    /// Deserialized tiers skip `new`, so reference-data loading calls this
    /// for every tier.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.tier_id.trim().is_empty() {
            return Err(PricingError::InvalidArgument(
                "tier_id must not be empty".to_string(),
            ));
        }
        check_percent(&self.tier_id, "admin_fee_percent", self.admin_fee_percent)?;
        check_percent(&self.tier_id, "payment_fee_percent", self.payment_fee_percent)?;
        check_percent(
            &self.tier_id,
            "free_shipping_fee_percent",
            self.free_shipping_fee_percent,
        )?;
        Ok(())
    }

    pub fn tier_id(&self) -> &str {
        &self.tier_id
    }

    /// Display label, falling back to the id when none was configured
    pub fn name(&self) -> &str {
        if self.name.is_empty() {
            &self.tier_id
        } else {
            &self.name
        }
    }

    pub fn admin_fee_percent(&self) -> f64 {
        self.admin_fee_percent
    }

    pub fn payment_fee_percent(&self) -> f64 {
        self.payment_fee_percent
    }

    pub fn free_shipping_fee_percent(&self) -> f64 {
        self.free_shipping_fee_percent
    }

    /// Sum of all three percentages
    ///
    /// May exceed 100; the calculator does not clamp.
    pub fn total_percent(&self) -> f64 {
        self.admin_fee_percent + self.payment_fee_percent + self.free_shipping_fee_percent
    }
}

fn check_percent(tier_id: &str, field: &str, value: f64) -> Result<(), PricingError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(PricingError::InvalidArgument(format!(
            "tier '{}': {} must be within [0, 100], got {}",
            tier_id, field, value
        )));
    }
    Ok(())
}

/// A marketplace and its ordered membership tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplacePlatform {
    platform_id: String,
    name: String,
    tiers: Vec<FeeTier>,
}

impl MarketplacePlatform {
    /// Create a platform
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` when the tier list is empty, a tier is
    /// invalid, or two tiers share an id.
    pub fn new(
        platform_id: impl Into<String>,
        name: impl Into<String>,
        tiers: Vec<FeeTier>,
    ) -> Result<Self, PricingError> {
        let platform = Self {
            platform_id: platform_id.into(),
            name: name.into(),
            tiers,
        };
        platform.validate()?;
        Ok(platform)
    }

    /// Build without validation; built-in tables are covered by tests instead
    pub(crate) fn from_parts(platform_id: &str, name: &str, tiers: Vec<FeeTier>) -> Self {
        Self {
            platform_id: platform_id.to_string(),
            name: name.to_string(),
            tiers,
        }
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if self.platform_id.trim().is_empty() {
            return Err(PricingError::InvalidArgument(
                "platform_id must not be empty".to_string(),
            ));
        }
        if self.tiers.is_empty() {
            return Err(PricingError::InvalidArgument(format!(
                "platform '{}' must offer at least one tier",
                self.platform_id
            )));
        }
        for (i, tier) in self.tiers.iter().enumerate() {
            tier.validate()?;
            if self.tiers[..i].iter().any(|t| t.tier_id == tier.tier_id) {
                return Err(PricingError::InvalidArgument(format!(
                    "platform '{}': duplicate tier '{}'",
                    self.platform_id, tier.tier_id
                )));
            }
        }
        Ok(())
    }

    pub fn platform_id(&self) -> &str {
        &self.platform_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tiers(&self) -> &[FeeTier] {
        &self.tiers
    }

    /// Look up a tier by id
    pub fn tier(&self, tier_id: &str) -> Option<&FeeTier> {
        self.tiers.iter().find(|t| t.tier_id == tier_id)
    }

    /// The first (entry-level) tier
    pub fn default_tier(&self) -> Option<&FeeTier> {
        self.tiers.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_shipping_defaults_to_zero() {
        let tier = FeeTier::new("regular", "Regular", 5.0, 2.0, None).unwrap();
        assert_eq!(tier.free_shipping_fee_percent(), 0.0);
        assert_eq!(tier.total_percent(), 7.0);
    }

    #[test]
    fn test_free_shipping_defaults_when_absent_from_json() {
        let json = r#"{"tier_id":"star","admin_fee_percent":6.0,"payment_fee_percent":1.8}"#;
        let tier: FeeTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.free_shipping_fee_percent(), 0.0);
        assert_eq!(tier.name(), "star");
    }

    #[test]
    fn test_rejects_out_of_range_percent() {
        assert!(FeeTier::new("t", "T", 100.5, 0.0, None).is_err());
        assert!(FeeTier::new("t", "T", -0.1, 0.0, None).is_err());
        assert!(FeeTier::new("t", "T", 0.0, f64::NAN, None).is_err());
        assert!(FeeTier::new("t", "T", 0.0, 0.0, Some(f64::INFINITY)).is_err());
        assert!(FeeTier::new("t", "T", 100.0, 100.0, Some(100.0)).is_ok());
    }

    #[test]
    fn test_rejects_empty_tier_id() {
        assert!(FeeTier::new("  ", "Blank", 1.0, 1.0, None).is_err());
    }

    #[test]
    fn test_platform_requires_tiers() {
        let err = MarketplacePlatform::new("shopee", "Shopee", vec![]).unwrap_err();
        assert!(matches!(err, PricingError::InvalidArgument(msg) if msg.contains("at least one tier")));
    }

    #[test]
    fn test_platform_rejects_duplicate_tier() {
        let tier = FeeTier::new("regular", "Regular", 5.0, 2.0, None).unwrap();
        let result = MarketplacePlatform::new("shopee", "Shopee", vec![tier.clone(), tier]);
        assert!(result.is_err());
    }

    #[test]
    fn test_platform_tier_lookup() {
        let platform = MarketplacePlatform::new(
            "shopee",
            "Shopee",
            vec![
                FeeTier::new("regular", "Regular", 5.0, 2.0, None).unwrap(),
                FeeTier::new("mall", "Mall", 8.0, 2.0, Some(4.0)).unwrap(),
            ],
        )
        .unwrap();

        assert_eq!(platform.tier("mall").unwrap().admin_fee_percent(), 8.0);
        assert!(platform.tier("missing").is_none());
        assert_eq!(platform.default_tier().unwrap().tier_id(), "regular");
    }
}
