//! Billing engine configuration

use serde::{Deserialize, Serialize};

/// Default monthly price before any term discount
pub const DEFAULT_BASE_PRICE: f64 = 10.0;

/// Default discount fraction granted per month beyond the first
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.05;

/// Pricing parameters for a [`BillingEngine`](crate::BillingEngine)
///
/// Fixed for the lifetime of the engine that owns it. Missing fields take their
/// defaults when deserialized, so integrators can load a partial config:
///
/// ```rust
/// use fib_billing::BillingConfig;
///
/// let config: BillingConfig = serde_json::from_str(r#"{"base_price": 20.0}"#).unwrap();
/// assert!((config.discount_rate - 0.05).abs() < f64::EPSILON);
/// assert!(!config.cap_term);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Price per month before discount
    pub base_price: f64,
    /// Discount fraction applied per extra month of term length
    pub discount_rate: f64,
    /// Clamp term lengths to `max_term`
    pub cap_term: bool,
    /// Term ceiling in months (0 = no effective cap)
    pub max_term: u64,
}

impl BillingConfig {
    /// Create a configuration with the default pricing and no term cap
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base_price: DEFAULT_BASE_PRICE,
            discount_rate: DEFAULT_DISCOUNT_RATE,
            cap_term: false,
            max_term: 0,
        }
    }

    #[must_use]
    pub const fn with_base_price(self, base_price: f64) -> Self {
        Self { base_price, ..self }
    }

    #[must_use]
    pub const fn with_discount_rate(self, discount_rate: f64) -> Self {
        Self {
            discount_rate,
            ..self
        }
    }

    /// Enable term capping at `max_term` months
    #[must_use]
    pub const fn with_max_term(self, max_term: u64) -> Self {
        Self {
            cap_term: true,
            max_term,
            ..self
        }
    }

    /// Disable term capping, keeping the stored ceiling
    #[must_use]
    pub const fn without_cap(self) -> Self {
        Self {
            cap_term: false,
            ..self
        }
    }

    /// Effective ceiling, if capping applies
    #[must_use]
    pub const fn term_cap(&self) -> Option<u64> {
        if self.cap_term && self.max_term > 0 {
            Some(self.max_term)
        } else {
            None
        }
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self::new()
    }
}
