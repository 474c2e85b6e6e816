//! Term command implementation

use crate::utils::formatting::{format_json_success, OutputFormat};
use anyhow::Result;
use fib_billing::BillingEngine;
use serde::Serialize;
use tracing::info;

/// Term length resolved for one cycle
#[derive(Debug, Serialize)]
pub struct TermInfo {
    /// Completed cycles before this one (zero-indexed input)
    pub current_cycle: i64,
    /// Cycle being billed (1-indexed)
    pub cycle: i64,
    pub term_months: u64,
}

/// Execute the term command
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn execute(
    engine: &BillingEngine,
    current_cycle: i64,
    output_format: OutputFormat,
) -> Result<String> {
    info!("Resolving term after {} completed cycles", current_cycle);

    let term = TermInfo {
        current_cycle,
        cycle: current_cycle.saturating_add(1),
        term_months: engine.next_term(current_cycle),
    };

    match output_format {
        OutputFormat::Human => Ok(format!(
            "Cycle {} term: {} months",
            term.cycle, term.term_months
        )),
        OutputFormat::Json => format_json_success(&term),
    }
}
