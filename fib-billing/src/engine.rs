//! Fibonacci billing engine
//!
//! Prices successive billing cycles whose terms follow the Fibonacci sequence,
//! with a discount that grows by `discount_rate` for every month beyond the
//! first, capped at [`MAX_DISCOUNT_FRACTION`].
//!
//! Cycle inputs are zero-indexed counts of completed cycles; the records the
//! engine returns number cycles from 1. `calculate_next_billing(0)` is the
//! customer's first bill and reports `cycle == 1`.
//!
//! The engine performs no validation. Degenerate configuration yields
//! degenerate but well-typed numbers (zero, negative, NaN or infinite); run
//! [`validate_config`](crate::validate_config) beforehand to reject it.
//!
//! # Example
//!
//! ```rust
//! use fib_billing::{BillingConfig, BillingEngine};
//!
//! let engine = BillingEngine::new(BillingConfig::default().with_base_price(20.0));
//!
//! let fourth = engine.calculate_next_billing(3);
//! assert_eq!(fourth.cycle, 4);
//! assert_eq!(fourth.term_months, 5);
//! assert!((fourth.final_amount - 80.0).abs() < f64::EPSILON);
//!
//! let summary = engine.billing_summary(3);
//! assert_eq!(summary.total_months, 6);
//! ```

use crate::{
    config::BillingConfig,
    rounding::round_cents,
    sequence::{TermSequence, SEED_TERMS},
    types::{BillingCycleInfo, BillingSummary},
};
use tracing::trace;

/// Upper bound on the discount fraction, regardless of term length or rate
pub const MAX_DISCOUNT_FRACTION: f64 = 0.5;

/// Number of cycles scheduled or summarised when the caller has no preference
pub const DEFAULT_SCHEDULE_CYCLES: u32 = 10;

/// Calculator for Fibonacci-term billing
///
/// Holds an immutable [`BillingConfig`] and its own term cache. The engine is
/// `Send + Sync`; share one instance behind an `Arc` to reuse the cache across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct BillingEngine {
    config: BillingConfig,
    sequence: TermSequence,
}

impl BillingEngine {
    #[must_use]
    pub fn new(config: BillingConfig) -> Self {
        Self {
            config,
            sequence: TermSequence::new(),
        }
    }

    pub const fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Number of Fibonacci terms currently cached by this engine
    pub fn cached_terms(&self) -> usize {
        self.sequence.depth()
    }

    /// Term length in months for the cycle after `current_cycle` completed cycles
    ///
    /// Negative input is treated as "before the first cycle" and yields the
    /// first term. When capping is enabled with a positive ceiling, the term is
    /// clamped to `max_term`.
    pub fn next_term(&self, current_cycle: i64) -> u64 {
        let term = match usize::try_from(current_cycle) {
            Ok(index) => self.sequence.term_at(index),
            // Negative cycles fall back to the first term; the second arm only
            // triggers on targets where usize is narrower than i64.
            Err(_) if current_cycle < 0 => SEED_TERMS[0],
            Err(_) => self.sequence.term_at(usize::MAX),
        };

        match self.config.term_cap() {
            Some(max_term) => term.min(max_term),
            None => term,
        }
    }

    /// Price the cycle after `current_cycle` completed cycles
    #[allow(clippy::cast_precision_loss)] // Terms beyond 2^53 months are already meaningless prices
    pub fn calculate_next_billing(&self, current_cycle: i64) -> BillingCycleInfo {
        let term_months = self.next_term(current_cycle);
        let months = term_months as f64;

        let base_amount = self.config.base_price * months;
        let discount_fraction = discount_fraction(self.config.discount_rate, term_months);
        let final_amount = base_amount * (1.0 - discount_fraction);

        let info = BillingCycleInfo {
            cycle: current_cycle.saturating_add(1),
            term_months,
            base_amount: round_cents(base_amount),
            discount: round_cents(discount_fraction * 100.0),
            final_amount: round_cents(final_amount),
            savings_amount: round_cents(base_amount - final_amount),
            effective_monthly_rate: round_cents(final_amount / months),
        };

        trace!(
            "Priced cycle {}: {} months, {}% off, {:.2} due",
            info.cycle,
            info.term_months,
            info.discount,
            info.final_amount
        );

        info
    }

    /// Price the first `cycles` cycles, in order
    pub fn generate_billing_schedule(&self, cycles: u32) -> Vec<BillingCycleInfo> {
        self.schedule_from(0, cycles)
    }

    /// Price `cycles` consecutive cycles starting after `start_cycle` completed ones
    pub fn schedule_from(&self, start_cycle: i64, cycles: u32) -> Vec<BillingCycleInfo> {
        (0..cycles)
            .map(|offset| self.calculate_next_billing(start_cycle.saturating_add(i64::from(offset))))
            .collect()
    }

    /// Summarise the first `cycles` cycles
    ///
    /// With `cycles == 0` or a zero base price the ratio fields are NaN.
    pub fn billing_summary(&self, cycles: u32) -> BillingSummary {
        BillingSummary::from_schedule(&self.generate_billing_schedule(cycles))
    }
}

/// Discount fraction for a term, linear in extra months and capped at 50%
///
/// A NaN rate stays NaN rather than collapsing to the cap.
#[allow(clippy::cast_precision_loss)]
fn discount_fraction(discount_rate: f64, term_months: u64) -> f64 {
    let extra_months = term_months.saturating_sub(1) as f64;
    let fraction = discount_rate * extra_months;
    if fraction > MAX_DISCOUNT_FRACTION {
        MAX_DISCOUNT_FRACTION
    } else {
        fraction
    }
}
