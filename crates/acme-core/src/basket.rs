//! # Basket
//!
//! Accumulates validated product codes and computes the final price on
//! demand.
//!
//! ## Configuration Ownership
//! The basket borrows its three configuration inputs instead of cloning
//! them. The borrow checker then enforces the sharing contract
//! statically: the caller cannot mutate the catalogue, delivery rules,
//! or offers while any basket referencing them is alive. Several baskets
//! may share one configuration read-only.
//!
//! A basket itself is a single-checkout-session value: mutated only by
//! `add`, read by `total`, then discarded. Concurrent mutation of one
//! basket must be serialized externally; there is no internal locking.

use crate::error::{BasketError, BasketResult};
use crate::money::Money;
use crate::pricing;
use crate::types::{Catalogue, DeliveryRule, Offer};

/// A shopping basket for one checkout session.
///
/// ## Usage
/// ```rust
/// use acme_core::{Basket, Catalogue, DeliveryRule, Money};
///
/// let catalogue: Catalogue = [
///     ("B01", Money::from_cents(795)),
///     ("G01", Money::from_cents(2495)),
/// ]
/// .into_iter()
/// .collect();
/// let rules = [DeliveryRule::new(Money::from_cents(5000), Money::from_cents(495))];
///
/// let mut basket = Basket::new(&catalogue, &rules, &[]);
/// basket.add("B01").unwrap();
/// basket.add("G01").unwrap();
/// assert_eq!(basket.total(), Money::from_cents(3785));
/// ```
#[derive(Debug, Clone)]
pub struct Basket<'a> {
    catalogue: &'a Catalogue,
    delivery_rules: &'a [DeliveryRule],
    offers: &'a [Offer],
    items: Vec<String>,
}

impl<'a> Basket<'a> {
    /// Creates an empty basket over the given configuration.
    ///
    /// The configuration structures themselves are not validated here:
    /// the delivery table is trusted to be ascending by threshold, and
    /// the offer list is stored as-is.
    pub fn new(
        catalogue: &'a Catalogue,
        delivery_rules: &'a [DeliveryRule],
        offers: &'a [Offer],
    ) -> Self {
        Basket {
            catalogue,
            delivery_rules,
            offers,
            items: Vec::new(),
        }
    }

    /// Adds one unit of a product to the basket.
    ///
    /// Fails with [`BasketError::UnknownProduct`] if the code is not
    /// listed in the catalogue; the basket is left unchanged on failure.
    pub fn add(&mut self, product_code: &str) -> BasketResult<()> {
        if !self.catalogue.contains(product_code) {
            return Err(BasketError::UnknownProduct(product_code.to_string()));
        }
        self.items.push(product_code.to_string());
        Ok(())
    }

    /// Computes the payable amount: subtotal with the offer applied,
    /// plus the delivery cost for that subtotal.
    ///
    /// Read-only and deterministic; calling it repeatedly without
    /// intervening `add` calls returns the same value. An empty basket
    /// still evaluates a delivery charge for subtotal zero (the lowest
    /// tier, under typical rules).
    pub fn total(&self) -> Money {
        let counts = pricing::tally(&self.items);
        let subtotal = pricing::subtotal(counts, self.catalogue);
        subtotal + pricing::delivery_cost(subtotal, self.delivery_rules)
    }

    /// Number of items added so far (duplicates included).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the basket has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The offer list this basket was configured with.
    ///
    /// Accepted as configuration but not consulted by the pricing step;
    /// see [`crate::pricing::subtotal`].
    pub fn offers(&self) -> &[Offer] {
        self.offers
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        [
            ("R01", Money::from_cents(3295)),
            ("G01", Money::from_cents(2495)),
            ("B01", Money::from_cents(795)),
        ]
        .into_iter()
        .collect()
    }

    fn rules() -> Vec<DeliveryRule> {
        vec![
            DeliveryRule::new(Money::from_cents(5000), Money::from_cents(495)),
            DeliveryRule::new(Money::from_cents(9000), Money::from_cents(295)),
        ]
    }

    fn offers() -> Vec<Offer> {
        vec![Offer::BuyOneGetSecondHalfPrice {
            product: "R01".to_string(),
        }]
    }

    #[test]
    fn test_add_known_product() {
        let catalogue = catalogue();
        let rules = rules();
        let offers = offers();
        let mut basket = Basket::new(&catalogue, &rules, &offers);

        basket.add("B01").unwrap();
        basket.add("B01").unwrap();

        assert_eq!(basket.item_count(), 2);
        assert!(!basket.is_empty());
    }

    #[test]
    fn test_add_unknown_product_fails_without_mutation() {
        let catalogue = catalogue();
        let rules = rules();
        let mut basket = Basket::new(&catalogue, &rules, &[]);
        basket.add("G01").unwrap();

        let err = basket.add("X99").unwrap_err();
        assert_eq!(err, BasketError::UnknownProduct("X99".to_string()));

        // Failed add left the basket untouched
        assert_eq!(basket.item_count(), 1);
        assert_eq!(basket.total(), Money::from_cents(2495 + 495));
    }

    #[test]
    fn test_empty_basket_still_pays_delivery() {
        let catalogue = catalogue();
        let rules = rules();
        let basket = Basket::new(&catalogue, &rules, &[]);

        assert!(basket.is_empty());
        assert_eq!(basket.total(), Money::from_cents(495));
    }

    #[test]
    fn test_empty_basket_empty_rule_table_is_zero() {
        let catalogue = catalogue();
        let basket = Basket::new(&catalogue, &[], &[]);
        assert_eq!(basket.total(), Money::zero());
    }

    #[test]
    fn test_total_is_idempotent() {
        let catalogue = catalogue();
        let rules = rules();
        let mut basket = Basket::new(&catalogue, &rules, &[]);
        basket.add("R01").unwrap();
        basket.add("R01").unwrap();

        let first = basket.total();
        assert_eq!(basket.total(), first);
        assert_eq!(basket.total(), first);
    }

    #[test]
    fn test_total_ignores_add_order() {
        let catalogue = catalogue();
        let rules = rules();

        let mut forward = Basket::new(&catalogue, &rules, &[]);
        for code in ["B01", "B01", "R01", "R01", "R01"] {
            forward.add(code).unwrap();
        }

        let mut shuffled = Basket::new(&catalogue, &rules, &[]);
        for code in ["R01", "B01", "R01", "B01", "R01"] {
            shuffled.add(code).unwrap();
        }

        assert_eq!(forward.total(), shuffled.total());
    }

    #[test]
    fn test_offers_accessor_returns_configuration() {
        let catalogue = catalogue();
        let rules = rules();
        let offers = offers();
        let basket = Basket::new(&catalogue, &rules, &offers);
        assert_eq!(basket.offers().len(), 1);
    }

    #[test]
    fn test_configuration_shared_across_baskets() {
        let catalogue = catalogue();
        let rules = rules();

        let mut one = Basket::new(&catalogue, &rules, &[]);
        let mut two = Basket::new(&catalogue, &rules, &[]);
        one.add("B01").unwrap();
        two.add("G01").unwrap();

        assert_eq!(one.total(), Money::from_cents(795 + 495));
        assert_eq!(two.total(), Money::from_cents(2495 + 495));
    }
}
