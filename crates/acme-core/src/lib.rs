//! # acme-core: Pure Pricing Logic for the Acme Basket
//!
//! This crate is the pricing engine for a single merchant's order
//! pipeline: given a sequence of added product codes, it returns the
//! final payable amount. All logic is pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Acme Basket Architecture                       │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Embedding application                       │   │
//! │  │   (order pipeline, demo CLI, ...) supplies configuration    │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ acme-core (THIS CRATE) ★                    │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌───────────────┐  │   │
//! │  │  │  types  │  │  money  │  │ basket  │  │    pricing    │  │   │
//! │  │  │Catalogue│  │  Money  │  │ Basket  │  │tally/subtotal/│  │   │
//! │  │  │Rule/Offer│ │ (cents) │  │add/total│  │ delivery_cost │  │   │
//! │  │  └─────────┘  └─────────┘  └─────────┘  └───────────────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Configuration types (Catalogue, DeliveryRule, Offer)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`basket`] - The basket entity (`add`, `total`)
//! - [`pricing`] - The pure computation steps composed by `total`
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use acme_core::{Basket, Catalogue, DeliveryRule, Money};
//!
//! let catalogue: Catalogue = [
//!     ("R01", Money::from_cents(3295)),
//!     ("G01", Money::from_cents(2495)),
//!     ("B01", Money::from_cents(795)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let delivery_rules = [
//!     DeliveryRule::new(Money::from_cents(5000), Money::from_cents(495)),
//!     DeliveryRule::new(Money::from_cents(9000), Money::from_cents(295)),
//! ];
//!
//! let mut basket = Basket::new(&catalogue, &delivery_rules, &[]);
//! basket.add("R01").unwrap();
//! basket.add("R01").unwrap();
//!
//! // 32.95 + 16.48 (second unit half price) + 4.95 delivery
//! assert_eq!(basket.total(), Money::from_cents(5438));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use acme_core::Money` instead of
// `use acme_core::money::Money`

pub use basket::Basket;
pub use error::{BasketError, BasketResult};
pub use money::Money;
pub use types::{Catalogue, DeliveryRule, Offer};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The product the half-price offer is tied to ("red widget" in the
/// reference catalogue).
///
/// The pricing step recognizes exactly this one rule on exactly this
/// product, regardless of what the configured offer list contains. The
/// list is still accepted so the gap stays visible in the API; lifting
/// the rule into a dispatch over [`types::Offer`] is the intended
/// extension point.
pub const HALF_PRICE_PRODUCT: &str = "R01";
