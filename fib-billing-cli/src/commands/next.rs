//! Next billing command implementation

use crate::utils::formatting::{format_cycle_human, format_json_success, OutputFormat};
use anyhow::Result;
use fib_billing::BillingEngine;
use tracing::info;

/// Execute the next billing command
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn execute(
    engine: &BillingEngine,
    current_cycle: i64,
    output_format: OutputFormat,
) -> Result<String> {
    info!("Pricing next bill after {} completed cycles", current_cycle);

    let billing = engine.calculate_next_billing(current_cycle);
    info!("Priced: {}", billing.description());

    match output_format {
        OutputFormat::Human => Ok(format_cycle_human(&billing)),
        OutputFormat::Json => format_json_success(&billing),
    }
}
