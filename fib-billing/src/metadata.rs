//! Provider metadata for priced billing cycles
//!
//! Payment integrations attach a handful of cycle fields to the objects they
//! create on the provider side (prices, subscriptions, checkout sessions).
//! Providers only accept string values, so everything is rendered here once
//! and consistently.

use crate::types::BillingCycleInfo;
use std::collections::BTreeMap;

pub const CYCLE_KEY: &str = "cycle";
pub const TERM_MONTHS_KEY: &str = "term_months";
pub const DISCOUNT_KEY: &str = "discount";
pub const BASE_AMOUNT_KEY: &str = "base_amount";
pub const FINAL_AMOUNT_KEY: &str = "final_amount";
pub const SAVINGS_AMOUNT_KEY: &str = "savings_amount";

impl BillingCycleInfo {
    /// String key/value pairs describing this cycle for a payment provider
    ///
    /// Amounts carry exactly two decimals; the discount is printed in
    /// percentage points without trailing zeros.
    #[must_use]
    pub fn metadata(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CYCLE_KEY.to_string(), self.cycle.to_string()),
            (TERM_MONTHS_KEY.to_string(), self.term_months.to_string()),
            (DISCOUNT_KEY.to_string(), self.discount.to_string()),
            (BASE_AMOUNT_KEY.to_string(), format!("{:.2}", self.base_amount)),
            (FINAL_AMOUNT_KEY.to_string(), format!("{:.2}", self.final_amount)),
            (
                SAVINGS_AMOUNT_KEY.to_string(),
                format!("{:.2}", self.savings_amount),
            ),
        ])
    }

    /// One-line label, e.g. `Cycle 4: 5-month term, 20% off`
    #[must_use]
    pub fn description(&self) -> String {
        if self.discount > 0.0 {
            format!(
                "Cycle {}: {}-month term, {}% off",
                self.cycle, self.term_months, self.discount
            )
        } else {
            format!("Cycle {}: {}-month term", self.cycle, self.term_months)
        }
    }
}
