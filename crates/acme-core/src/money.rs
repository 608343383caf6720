//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  Half price of $32.95 = $16.475 → which cent does it land on?       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    All amounts are i64 cents. The single fractional computation     │
//! │    in the system (the half-price offer) rounds half up to the       │
//! │    cent, once, via `half_price`.                                    │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acme_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(3295); // $32.95
//!
//! // Arithmetic operations
//! let pair = price * 2;                       // $65.90
//! let with_delivery = price + Money::from_cents(495); // $37.90
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: room for any realistic basket without overflow
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Full `Ord`**: delivery thresholds compare directly against subtotals
/// - **Serde as plain integer**: `3295` in config means $32.95
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let price = Money::from_cents(3295); // Represents $32.95
    /// assert_eq!(price.cents(), 3295);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let price = Money::from_major_minor(32, 95); // $32.95
    /// assert_eq!(price.cents(), 3295);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Half of the amount, rounded half up to the whole cent.
    ///
    /// This is the only place in the pricing computation where a fraction
    /// of a cent can arise (an odd cent amount split in two), so rounding
    /// happens exactly once, here, before any comparison or display.
    ///
    /// ## Implementation
    /// Integer math at 5000 basis points: `(cents * 5000 + 5000) / 10000`.
    /// The `+5000` rounds the half-cent case up. i128 prevents overflow
    /// on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// // $32.95 → $16.475 → $16.48
    /// assert_eq!(Money::from_cents(3295).half_price().cents(), 1648);
    /// // $65.90 halves exactly
    /// assert_eq!(Money::from_cents(6590).half_price().cents(), 3295);
    /// ```
    pub fn half_price(&self) -> Money {
        let half = (self.0 as i128 * 5000 + 5000) / 10000;
        Money::from_cents(half as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values (line-item accumulation).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
