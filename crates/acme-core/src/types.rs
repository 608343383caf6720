//! # Configuration Types
//!
//! The three caller-supplied configuration inputs for a basket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Pricing Configuration                          │
//! │                                                                     │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────┐ │
//! │  │    Catalogue    │  │  DeliveryRule   │  │       Offer         │ │
//! │  │  ─────────────  │  │  ─────────────  │  │  ─────────────────  │ │
//! │  │  code → price   │  │  threshold      │  │  BuyOneGetSecond-   │ │
//! │  │  ("R01"→$32.95) │  │  cost           │  │  HalfPrice{product} │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────┘ │
//! │                                                                     │
//! │  All three are immutable for the lifetime of a basket that         │
//! │  borrows them.                                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Every type derives serde so the configuration can be loaded from a
//! JSON file. Prices and thresholds are integers in cents:
//!
//! ```json
//! {
//!   "catalogue": { "R01": 3295, "G01": 2495, "B01": 795 },
//!   "delivery_rules": [ { "threshold": 5000, "cost": 495 } ],
//!   "offers": [ { "type": "buy_one_get_second_half_price", "product": "R01" } ]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Catalogue
// =============================================================================

/// The product catalogue: product code → unit price.
///
/// Codes are unique string identifiers; prices are non-negative amounts.
/// The catalogue itself is never validated beyond lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalogue {
    prices: HashMap<String, Money>,
}

impl Catalogue {
    /// Creates a catalogue from a code → price mapping.
    pub fn new(prices: HashMap<String, Money>) -> Self {
        Catalogue { prices }
    }

    /// Returns the unit price for a product code, if listed.
    pub fn price(&self, code: &str) -> Option<Money> {
        self.prices.get(code).copied()
    }

    /// Checks whether a product code is listed.
    pub fn contains(&self, code: &str) -> bool {
        self.prices.contains_key(code)
    }

    /// Number of listed products.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Checks if the catalogue has no products.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Builds a catalogue from `(code, price)` pairs.
///
/// ```rust
/// use acme_core::{Catalogue, Money};
///
/// let catalogue: Catalogue = [("B01", Money::from_cents(795))].into_iter().collect();
/// assert!(catalogue.contains("B01"));
/// ```
impl<S: Into<String>> FromIterator<(S, Money)> for Catalogue {
    fn from_iter<I: IntoIterator<Item = (S, Money)>>(iter: I) -> Self {
        Catalogue {
            prices: iter.into_iter().map(|(c, p)| (c.into(), p)).collect(),
        }
    }
}

// =============================================================================
// Delivery Rule
// =============================================================================

/// A single delivery-cost tier.
///
/// The cost applies when the basket subtotal is strictly below the
/// threshold. Rules are supplied as an ordered table, ascending by
/// threshold; the table is evaluated in stored order and never re-sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRule {
    /// Exclusive upper bound: this tier matches subtotals strictly below it.
    pub threshold: Money,

    /// Delivery cost charged for this tier.
    pub cost: Money,
}

impl DeliveryRule {
    /// Creates a delivery tier.
    #[inline]
    pub const fn new(threshold: Money, cost: Money) -> Self {
        DeliveryRule { threshold, cost }
    }
}

// =============================================================================
// Offer
// =============================================================================

/// A promotional discount descriptor.
///
/// The offer list is accepted as configuration, but the pricing step
/// currently interprets exactly one fixed rule (second unit of the
/// designated product at half price) regardless of the list contents.
/// See [`crate::pricing::subtotal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Offer {
    /// Buy one unit of `product`, get the second at half price.
    BuyOneGetSecondHalfPrice {
        /// Product code the offer applies to.
        product: String,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_lookup() {
        let catalogue: Catalogue = [
            ("R01", Money::from_cents(3295)),
            ("G01", Money::from_cents(2495)),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalogue.price("R01"), Some(Money::from_cents(3295)));
        assert_eq!(catalogue.price("X99"), None);
        assert!(catalogue.contains("G01"));
        assert!(!catalogue.contains("B01"));
        assert_eq!(catalogue.len(), 2);
    }

    #[test]
    fn test_catalogue_empty() {
        let catalogue = Catalogue::default();
        assert!(catalogue.is_empty());
        assert_eq!(catalogue.price("R01"), None);
    }

    #[test]
    fn test_offer_wire_shape() {
        let json = r#"{ "type": "buy_one_get_second_half_price", "product": "R01" }"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(
            offer,
            Offer::BuyOneGetSecondHalfPrice {
                product: "R01".to_string()
            }
        );
    }

    #[test]
    fn test_delivery_rule_fields() {
        let rule = DeliveryRule::new(Money::from_cents(5000), Money::from_cents(495));
        assert_eq!(rule.threshold.cents(), 5000);
        assert_eq!(rule.cost.cents(), 495);
    }
}
