//! # Pricing Steps
//!
//! The three pure computation steps a basket total is composed of.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Basket::total()                              │
//! │                                                                     │
//! │  items: ["B01", "R01", "R01"]                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  tally() ──────────► { "B01": 1, "R01": 2 }                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  subtotal() ───────► half-price offer applied, rest at full price   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  delivery_cost() ──► first tier with subtotal < threshold           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  subtotal + delivery                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is deterministic and side-effect free; the basket
//! composes them at `total()`-call time.

use std::collections::HashMap;

use crate::money::Money;
use crate::types::{Catalogue, DeliveryRule};
use crate::HALF_PRICE_PRODUCT;

// =============================================================================
// Item Tally
// =============================================================================

/// Tallies an ordered item list into a code → quantity map.
///
/// Only counts matter downstream; the output carries no ordering
/// guarantee.
pub fn tally(items: &[String]) -> HashMap<&str, i64> {
    let mut counts = HashMap::new();
    for code in items {
        *counts.entry(code.as_str()).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Subtotal With Offer
// =============================================================================

/// Computes the basket subtotal, applying the half-price offer.
///
/// ## Offer Rule
/// For N ≥ 2 units of the designated product ([`HALF_PRICE_PRODUCT`]):
/// `ceil(N/2)` units at full price plus `floor(N/2)` units at half
/// price. The half-price amount is aggregated before rounding, so the
/// rounding rule of [`Money::half_price`] is applied once per basket.
/// One unit (or none) falls through to the full-price loop unchanged.
///
/// The offer list the basket was configured with is not consulted here;
/// the rule is fixed to one product and one shape. See the note on
/// [`crate::types::Offer`].
///
/// Codes the catalogue cannot price are skipped; `Basket::add` has
/// already guaranteed every tallied code is listed.
pub fn subtotal(mut counts: HashMap<&str, i64>, catalogue: &Catalogue) -> Money {
    let mut subtotal = Money::zero();

    // "Buy one red widget, get the second half price"
    if let Some(&quantity) = counts.get(HALF_PRICE_PRODUCT) {
        if quantity >= 2 {
            if let Some(unit_price) = catalogue.price(HALF_PRICE_PRODUCT) {
                let full_price_units = (quantity + 1) / 2;
                let half_price_units = quantity / 2;

                subtotal += unit_price * full_price_units;
                subtotal += (unit_price * half_price_units).half_price();

                // Processed; must not be charged again below
                counts.remove(HALF_PRICE_PRODUCT);
            }
        }
    }

    // Remaining items at full price
    for (code, quantity) in counts {
        if let Some(unit_price) = catalogue.price(code) {
            subtotal += unit_price * quantity;
        }
    }

    subtotal
}

// =============================================================================
// Delivery Cost Lookup
// =============================================================================

/// Looks up the delivery cost for a subtotal in the ordered tier table.
///
/// The first rule whose threshold strictly exceeds the subtotal wins;
/// `subtotal == threshold` falls through to the next tier. No match
/// (including an empty table) means free delivery.
pub fn delivery_cost(subtotal: Money, rules: &[DeliveryRule]) -> Money {
    rules
        .iter()
        .find(|rule| subtotal < rule.threshold)
        .map_or(Money::zero(), |rule| rule.cost)
}

// =============================================================================
// Unit Tests
// =============================================================================
