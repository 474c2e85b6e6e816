//! Schedule command implementation

use crate::utils::formatting::{format_json_success, format_schedule_human, OutputFormat};
use anyhow::Result;
use fib_billing::BillingEngine;
use tracing::info;

/// Execute the schedule command
///
/// `start_cycle` is the number of cycles the customer has already completed;
/// zero lists the schedule from the first bill.
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn execute(
    engine: &BillingEngine,
    start_cycle: i64,
    cycles: u32,
    output_format: OutputFormat,
) -> Result<String> {
    info!(
        "Generating {} cycle schedule after {} completed cycles",
        cycles, start_cycle
    );

    let schedule = engine.schedule_from(start_cycle, cycles);

    match output_format {
        OutputFormat::Human => Ok(format_schedule_human(&schedule)),
        OutputFormat::Json => format_json_success(&schedule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_json() {
        let engine = BillingEngine::default();

        let output = execute(&engine, 0, 4, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(data[3]["cycle"], 4);
        assert_eq!(data[3]["term_months"], 5);
    }

    #[test]
    fn test_schedule_window_json() {
        let engine = BillingEngine::default();

        let output = execute(&engine, 2, 2, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let cycles: Vec<i64> = value["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["cycle"].as_i64().unwrap())
            .collect();
        assert_eq!(cycles, vec![3, 4]);
    }

    #[test]
    fn test_empty_schedule_human() {
        let engine = BillingEngine::default();

        let output = execute(&engine, 0, 0, OutputFormat::Human).unwrap();
        assert_eq!(output, "No billing cycles requested");
    }
}
