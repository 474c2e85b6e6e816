//! Configuration management for the Fib Billing CLI
//!
//! Pricing defaults come from environment variables, falling back to the
//! library defaults when a variable is unset or unparseable. Command-line
//! flags override both.

use anyhow::Result;
use fib_billing::{
    validate_config, BillingConfig, BillingEngine, DEFAULT_BASE_PRICE, DEFAULT_DISCOUNT_RATE,
    DEFAULT_SCHEDULE_CYCLES,
};
use std::env;
use tracing::info;

/// Centralized configuration for the Fib Billing CLI
#[derive(Debug, Clone)]
pub struct FibBillingCliConfig {
    /// Monthly price before discount
    pub default_base_price: f64,

    /// Discount fraction per extra month of term
    pub default_discount_rate: f64,

    /// Term ceiling in months; `None` disables capping
    pub default_max_term: Option<u64>,

    /// Default output format for CLI commands
    pub default_output_format: String,

    /// Cycles scheduled or summarised when `--cycles` is omitted
    pub default_cycles: u32,
}

/// Pricing flags given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingOverrides {
    pub base_price: Option<f64>,
    pub discount_rate: Option<f64>,
    pub max_term: Option<u64>,
}

impl FibBillingCliConfig {
    /// Create a new configuration instance with values from environment variables
    /// or sensible defaults if not set
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_base_price: parse_env("FIB_BILLING_BASE_PRICE").unwrap_or(DEFAULT_BASE_PRICE),

            default_discount_rate: parse_env("FIB_BILLING_DISCOUNT_RATE")
                .unwrap_or(DEFAULT_DISCOUNT_RATE),

            default_max_term: parse_env("FIB_BILLING_MAX_TERM"),

            default_output_format: env::var("FIB_BILLING_DEFAULT_OUTPUT_FORMAT")
                .unwrap_or_else(|_| "human".to_string()),

            default_cycles: parse_env("FIB_BILLING_DEFAULT_CYCLES")
                .unwrap_or(DEFAULT_SCHEDULE_CYCLES),
        }
    }

    /// Build the engine configuration, applying command-line overrides
    #[must_use]
    pub fn billing_config(&self, overrides: &PricingOverrides) -> BillingConfig {
        let config = BillingConfig::new()
            .with_base_price(overrides.base_price.unwrap_or(self.default_base_price))
            .with_discount_rate(overrides.discount_rate.unwrap_or(self.default_discount_rate));

        match overrides.max_term.or(self.default_max_term) {
            Some(max_term) => config.with_max_term(max_term),
            None => config,
        }
    }

    /// Build an engine from the validated configuration
    ///
    /// # Errors
    /// Returns error if the price, discount rate or term cap is invalid
    pub fn build_engine(&self, overrides: &PricingOverrides) -> Result<BillingEngine> {
        let billing_config = self.billing_config(overrides);
        validate_config(&billing_config)?;

        info!(
            "Using base price {}, discount rate {}, term cap {:?}",
            billing_config.base_price,
            billing_config.discount_rate,
            billing_config.term_cap()
        );
        Ok(BillingEngine::new(billing_config))
    }
}

impl Default for FibBillingCliConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::formatting::format_json_error;
    use fib_billing::BillingError;

    fn defaults() -> FibBillingCliConfig {
        FibBillingCliConfig {
            default_base_price: DEFAULT_BASE_PRICE,
            default_discount_rate: DEFAULT_DISCOUNT_RATE,
            default_max_term: None,
            default_output_format: "human".to_string(),
            default_cycles: DEFAULT_SCHEDULE_CYCLES,
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = FibBillingCliConfig::new();

        // Test that defaults are sensible
        assert!(config.default_base_price.is_finite());
        assert!(config.default_discount_rate.is_finite());
        assert!(!config.default_output_format.is_empty());
    }

    #[test]
    fn test_billing_config_without_overrides() {
        let billing = defaults().billing_config(&PricingOverrides::default());

        assert_eq!(billing, BillingConfig::default());
    }

    #[test]
    fn test_overrides_win() {
        let config = FibBillingCliConfig {
            default_max_term: Some(8),
            ..defaults()
        };
        let overrides = PricingOverrides {
            base_price: Some(20.0),
            discount_rate: Some(0.1),
            max_term: Some(6),
        };

        let billing = config.billing_config(&overrides);
        assert!((billing.base_price - 20.0).abs() < f64::EPSILON);
        assert!((billing.discount_rate - 0.1).abs() < f64::EPSILON);
        assert_eq!(billing.term_cap(), Some(6));
    }

    #[test]
    fn test_default_max_term_enables_cap() {
        let config = FibBillingCliConfig {
            default_max_term: Some(8),
            ..defaults()
        };

        let billing = config.billing_config(&PricingOverrides::default());
        assert!(billing.cap_term);
        assert_eq!(billing.max_term, 8);
    }

    #[test]
    fn test_build_engine() {
        let overrides = PricingOverrides {
            base_price: Some(20.0),
            ..PricingOverrides::default()
        };

        let engine = defaults().build_engine(&overrides).unwrap();
        assert!((engine.config().base_price - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_discount_rate_rejected() {
        let overrides = PricingOverrides {
            discount_rate: Some(2.0),
            ..PricingOverrides::default()
        };

        let error = defaults().build_engine(&overrides).unwrap_err();
        let output = format_json_error(&error);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["success"], false);
        assert!(value["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid discount rate: 2"));
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_zero_default_max_term_rejected() {
        let config = FibBillingCliConfig {
            default_max_term: Some(0),
            ..defaults()
        };

        let error = config
            .build_engine(&PricingOverrides::default())
            .unwrap_err();
        assert_eq!(
            error.downcast_ref::<BillingError>(),
            Some(&BillingError::InvalidMaxTerm)
        );

        let value: serde_json::Value = serde_json::from_str(&format_json_error(&error)).unwrap();
        assert_eq!(value["success"], false);
        assert!(value["error"].as_str().unwrap().contains("maximum term is 0"));
    }

    #[test]
    fn test_parse_env_missing_key() {
        assert_eq!(parse_env::<u32>("FIB_BILLING_TEST_UNSET_VARIABLE"), None);
    }
}
