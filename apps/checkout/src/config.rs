//! # Checkout Configuration
//!
//! The pricing configuration the demo hands to the basket.
//!
//! ## Configuration Sources (Priority Order)
//! 1. JSON file passed with `--config`
//! 2. Built-in development defaults (this file)
//!
//! All amounts are integers in cents: `3295` means $32.95.

use std::fs;
use std::path::Path;

use acme_core::{Catalogue, DeliveryRule, Money, Offer};
use serde::Deserialize;

/// The three caller-supplied inputs of a basket, as one loadable unit.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    /// Product code → unit price in cents.
    pub catalogue: Catalogue,

    /// Delivery tiers, ascending by threshold.
    pub delivery_rules: Vec<DeliveryRule>,

    /// Promotional offers. Accepted as configuration; the pricing step
    /// currently interprets only the fixed half-price rule.
    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl Default for CheckoutConfig {
    /// Returns the reference merchant configuration, suitable for
    /// development and demos.
    ///
    /// ## Default Values
    /// - Catalogue: R01 $32.95, G01 $24.95, B01 $7.95
    /// - Delivery: under $50 → $4.95, under $90 → $2.95, else free
    /// - Offers: second red widget half price
    fn default() -> Self {
        CheckoutConfig {
            catalogue: [
                ("R01", Money::from_cents(3295)),
                ("G01", Money::from_cents(2495)),
                ("B01", Money::from_cents(795)),
            ]
            .into_iter()
            .collect(),
            delivery_rules: vec![
                DeliveryRule::new(Money::from_cents(5000), Money::from_cents(495)),
                DeliveryRule::new(Money::from_cents(9000), Money::from_cents(295)),
            ],
            offers: vec![Offer::BuyOneGetSecondHalfPrice {
                product: "R01".to_string(),
            }],
        }
    }
}

impl CheckoutConfig {
    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_configuration() {
        let config = CheckoutConfig::default();
        assert_eq!(config.catalogue.price("R01"), Some(Money::from_cents(3295)));
        assert_eq!(config.delivery_rules.len(), 2);
        assert_eq!(config.offers.len(), 1);
    }

    #[test]
    fn test_parse_json_configuration() {
        let raw = r#"{
            "catalogue": { "B01": 795 },
            "delivery_rules": [ { "threshold": 5000, "cost": 495 } ]
        }"#;
        let config: CheckoutConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.catalogue.price("B01"), Some(Money::from_cents(795)));
        // Offers may be omitted entirely
        assert!(config.offers.is_empty());
    }
}
