//! # Error Types
//!
//! Domain-specific error types for acme-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending product code)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Basket Error
// =============================================================================

/// Pricing domain errors.
///
/// The only failing operation in this crate is [`crate::Basket::add`]:
/// totalling never fails (an empty delivery table simply means free
/// delivery).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasketError {
    /// The product code is not listed in the catalogue.
    ///
    /// Raised synchronously by `add`; the basket is left unchanged.
    #[error("Product not found: {0}")]
    UnknownProduct(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BasketError.
pub type BasketResult<T> = Result<T, BasketError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BasketError::UnknownProduct("X99".to_string());
        assert_eq!(err.to_string(), "Product not found: X99");
    }
}
