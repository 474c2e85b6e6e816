//! Validation utilities for billing configuration
//!
//! Layered on top of the engine. [`BillingEngine`](crate::BillingEngine) accepts
//! any configuration and never calls into this module.

use crate::{
    config::BillingConfig,
    error::{BillingError, Result},
};

/// Largest per-month discount rate accepted by [`validate_discount_rate`]
pub const MAX_DISCOUNT_RATE: f64 = 1.0;

/// Validate the monthly base price
///
/// # Errors
/// Returns an error if the price is negative, NaN or infinite
pub fn validate_base_price(base_price: f64) -> Result<()> {
    if !base_price.is_finite() || base_price < 0.0 {
        return Err(BillingError::InvalidBasePrice(base_price));
    }
    Ok(())
}

/// Validate the per-month discount rate
///
/// # Errors
/// Returns an error if the rate is outside `[0, 1]` or not finite
pub fn validate_discount_rate(discount_rate: f64) -> Result<()> {
    if !discount_rate.is_finite() || !(0.0..=MAX_DISCOUNT_RATE).contains(&discount_rate) {
        return Err(BillingError::InvalidDiscountRate(discount_rate));
    }
    Ok(())
}

/// Validate the term cap settings
///
/// # Errors
/// Returns an error if capping is enabled with a zero ceiling
pub const fn validate_term_cap(cap_term: bool, max_term: u64) -> Result<()> {
    if cap_term && max_term == 0 {
        return Err(BillingError::InvalidMaxTerm);
    }
    Ok(())
}

/// Validate a full billing configuration
///
/// # Errors
/// Returns the first violated constraint
pub fn validate_config(config: &BillingConfig) -> Result<()> {
    validate_base_price(config.base_price)?;
    validate_discount_rate(config.discount_rate)?;
    validate_term_cap(config.cap_term, config.max_term)?;
    Ok(())
}
