//! Summary command implementation

use crate::utils::formatting::{format_json_success, format_summary_human, OutputFormat};
use anyhow::Result;
use fib_billing::BillingEngine;
use tracing::info;

/// Execute the summary command
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn execute(engine: &BillingEngine, cycles: u32, output_format: OutputFormat) -> Result<String> {
    info!("Summarising the first {} cycles", cycles);

    let summary = engine.billing_summary(cycles);
    info!(
        "Summary: {} months, {:.2} total, {:.2}% saved",
        summary.total_months, summary.total_amount, summary.savings_percentage
    );

    match output_format {
        OutputFormat::Human => Ok(format_summary_human(&summary)),
        OutputFormat::Json => format_json_success(&summary),
    }
}
