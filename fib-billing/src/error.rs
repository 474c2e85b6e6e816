//! Error types for the Fibonacci billing crate
//!
//! The [`BillingEngine`](crate::BillingEngine) itself never fails: degenerate
//! configuration flows through the arithmetic and shows up as zero, negative or
//! non-finite amounts. These errors belong to the opt-in validation layer in
//! [`validation`](crate::validation), which callers run before constructing an
//! engine when they want to reject such configuration up front.
//!
//! # Example
//!
//! ```rust
//! use fib_billing::{validate_config, BillingConfig, BillingError};
//!
//! let config = BillingConfig::default().with_discount_rate(1.5);
//! match validate_config(&config) {
//!     Err(BillingError::InvalidDiscountRate(rate)) => {
//!         println!("Discount rate {rate} is outside 0..=1");
//!     }
//!     Err(other) => println!("Other error: {other}"),
//!     Ok(()) => println!("Config accepted"),
//! }
//! ```

use thiserror::Error;

/// Result type for fallible billing operations
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors raised when validating billing configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BillingError {
    /// Base price is negative or not a finite number
    #[error("Invalid base price: {0}. The monthly base price must be a finite, non-negative amount.")]
    InvalidBasePrice(f64),

    /// Discount rate is outside `[0, 1]` or not a finite number
    #[error("Invalid discount rate: {0}. The per-month discount rate must be between 0 and 1.")]
    InvalidDiscountRate(f64),

    /// Term capping is enabled without a positive ceiling
    #[error("Invalid term cap: capping is enabled but the maximum term is 0 months.")]
    InvalidMaxTerm,
}
