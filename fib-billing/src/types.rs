//! Billing record types produced by the engine

use crate::rounding::round_cents;
use serde::{Deserialize, Serialize};

/// Priced billing cycle
///
/// Monetary fields are rounded to cents when the record is built and are
/// never recomputed. `savings_amount` is rounded from the unrounded base and
/// final amounts, so `base_amount - final_amount` may differ from it by a cent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillingCycleInfo {
    /// Cycle number, 1-indexed (the customer's first bill is cycle 1)
    pub cycle: i64,
    /// Term length in months
    pub term_months: u64,
    /// Price before discount
    pub base_amount: f64,
    /// Discount in percentage points (0-50)
    pub discount: f64,
    /// Price after discount
    pub final_amount: f64,
    /// Amount saved by the discount
    pub savings_amount: f64,
    /// Discounted price per month of the term
    pub effective_monthly_rate: f64,
}

/// Aggregate statistics over a billing schedule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillingSummary {
    /// Number of cycles summarised
    pub cycles: u32,
    /// Total months covered
    pub total_months: u64,
    /// Sum of discounted amounts
    pub total_amount: f64,
    /// Sum of undiscounted amounts
    pub total_base_amount: f64,
    /// Sum of savings
    pub total_savings: f64,
    /// Savings as a percentage of the undiscounted total
    pub savings_percentage: f64,
    /// Discounted total per month covered
    pub effective_monthly_rate: f64,
}

impl BillingSummary {
    /// Reduce a schedule into summary statistics
    ///
    /// Ratios are not guarded against zero denominators: an empty schedule or a
    /// zero base price yields NaN or infinite `savings_percentage` and
    /// `effective_monthly_rate`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Month totals stay far below 2^53 outside saturation
    pub fn from_schedule(schedule: &[BillingCycleInfo]) -> Self {
        let cycles = u32::try_from(schedule.len()).unwrap_or(u32::MAX);
        let total_months = schedule
            .iter()
            .fold(0_u64, |acc, info| acc.saturating_add(info.term_months));

        let total_amount = schedule.iter().fold(0.0, |acc, info| acc + info.final_amount);
        let total_base_amount = schedule.iter().fold(0.0, |acc, info| acc + info.base_amount);
        let total_savings = schedule
            .iter()
            .fold(0.0, |acc, info| acc + info.savings_amount);

        Self {
            cycles,
            total_months,
            total_amount: round_cents(total_amount),
            total_base_amount: round_cents(total_base_amount),
            total_savings: round_cents(total_savings),
            savings_percentage: round_cents(total_savings / total_base_amount * 100.0),
            effective_monthly_rate: round_cents(total_amount / total_months as f64),
        }
    }
}
