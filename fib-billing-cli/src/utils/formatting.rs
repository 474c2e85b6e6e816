//! Output formatting utilities for the Fib Billing CLI

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use fib_billing::{BillingCycleInfo, BillingSummary};
use serde::Serialize;

/// Width of the schedule table rule
const TABLE_WIDTH: usize = 84;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Parse output format from string
///
/// # Errors
///
/// Returns an error for anything other than `human` or `json`
pub fn parse_output_format(format_str: &str) -> Result<OutputFormat> {
    match format_str.to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        _ => Err(anyhow!("Invalid output format: {format_str}")),
    }
}

/// Wrap a successful result in the JSON response envelope
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn format_json_success<T: Serialize>(data: &T) -> Result<String> {
    let json_output = serde_json::json!({
        "success": true,
        "data": data
    });
    serde_json::to_string_pretty(&json_output)
        .map_err(|e| anyhow!("Failed to serialize output to JSON: {e}"))
}

/// Render an error in the JSON response envelope
#[must_use]
pub fn format_json_error(error: &anyhow::Error) -> String {
    let json_output = serde_json::json!({
        "success": false,
        "error": error.to_string()
    });
    // A json! value of strings and bools always serializes
    serde_json::to_string_pretty(&json_output).unwrap_or_default()
}

/// Format a single billing cycle for human-readable output
#[must_use]
pub fn format_cycle_human(info: &BillingCycleInfo) -> String {
    use std::fmt::Write;

    let mut output = format!("{}\n\n", info.description());

    writeln!(&mut output, "{:<24} {}", "Cycle:", info.cycle).unwrap();
    writeln!(&mut output, "{:<24} {}", "Term (months):", info.term_months).unwrap();
    writeln!(&mut output, "{:<24} {:.2}", "Base amount:", info.base_amount).unwrap();
    writeln!(&mut output, "{:<24} {}%", "Discount:", info.discount).unwrap();
    writeln!(&mut output, "{:<24} {:.2}", "Final amount:", info.final_amount).unwrap();
    writeln!(&mut output, "{:<24} {:.2}", "Savings:", info.savings_amount).unwrap();
    write!(
        &mut output,
        "{:<24} {:.2}",
        "Effective monthly rate:", info.effective_monthly_rate
    )
    .unwrap();
    output
}

/// Format a billing schedule as a table
#[must_use]
pub fn format_schedule_human(schedule: &[BillingCycleInfo]) -> String {
    use std::fmt::Write;

    if schedule.is_empty() {
        return "No billing cycles requested".to_string();
    }

    let mut output = String::from("Billing schedule\n\n");

    // Use write! to avoid extra allocations
    writeln!(
        &mut output,
        "{:<8} {:<12} {:<12} {:<10} {:<12} {:<12} {:<12}",
        "Cycle", "Term (mo)", "Base", "Discount", "Final", "Savings", "Per Month"
    )
    .unwrap();
    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');

    for info in schedule {
        writeln!(
            &mut output,
            "{:<8} {:<12} {:<12.2} {:<10} {:<12.2} {:<12.2} {:<12.2}",
            info.cycle,
            info.term_months,
            info.base_amount,
            format!("{}%", info.discount),
            info.final_amount,
            info.savings_amount,
            info.effective_monthly_rate
        )
        .unwrap();
    }

    write!(&mut output, "\nTotal cycles: {}", schedule.len()).unwrap();
    output
}

/// Format a billing summary for human-readable output
#[must_use]
pub fn format_summary_human(summary: &BillingSummary) -> String {
    use std::fmt::Write;

    let mut output = format!("Billing summary over {} cycles\n\n", summary.cycles);

    writeln!(&mut output, "{:<24} {}", "Total months:", summary.total_months).unwrap();
    writeln!(&mut output, "{:<24} {:.2}", "Total amount:", summary.total_amount).unwrap();
    writeln!(
        &mut output,
        "{:<24} {:.2}",
        "Total base amount:", summary.total_base_amount
    )
    .unwrap();
    writeln!(&mut output, "{:<24} {:.2}", "Total savings:", summary.total_savings).unwrap();
    writeln!(
        &mut output,
        "{:<24} {:.2}%",
        "Savings percentage:", summary.savings_percentage
    )
    .unwrap();
    write!(
        &mut output,
        "{:<24} {:.2}",
        "Effective monthly rate:", summary.effective_monthly_rate
    )
    .unwrap();
    output
}
