//! Fib Billing - Fibonacci-term subscription billing engine
//!
//! Renewal terms follow the Fibonacci sequence (1, 2, 3, 5, 8, 13, ... months)
//! instead of fixed monthly or annual periods, and longer terms earn a
//! progressive discount. This crate provides:
//!
//! - Term resolution for any cycle, backed by a lazily grown per-engine cache
//! - Single-cycle pricing with cent rounding
//! - Multi-cycle schedules and aggregate summaries
//! - Opt-in configuration validation and payment-provider metadata
//!
//! # Example Usage
//!
//! ```rust
//! use fib_billing::{validate_config, BillingConfig, BillingEngine};
//!
//! # fn main() -> fib_billing::Result<()> {
//! let config = BillingConfig::default()
//!     .with_base_price(20.0)
//!     .with_discount_rate(0.05);
//! validate_config(&config)?;
//!
//! let engine = BillingEngine::new(config);
//!
//! // Zero completed cycles: the customer's first bill
//! let first = engine.calculate_next_billing(0);
//! assert_eq!(first.cycle, 1);
//! assert_eq!(first.term_months, 1);
//!
//! // Upcoming bills for a customer who has paid three cycles
//! for info in engine.schedule_from(3, 2) {
//!     println!("{}", info.description());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod engine;
pub mod error;
pub mod metadata;
pub mod rounding;
pub mod sequence;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use config::{BillingConfig, DEFAULT_BASE_PRICE, DEFAULT_DISCOUNT_RATE};
pub use engine::{BillingEngine, DEFAULT_SCHEDULE_CYCLES, MAX_DISCOUNT_FRACTION};
pub use error::{BillingError, Result};
pub use rounding::round_cents;
pub use sequence::{TermSequence, SEED_TERMS};
pub use types::{BillingCycleInfo, BillingSummary};
pub use validation::*;
