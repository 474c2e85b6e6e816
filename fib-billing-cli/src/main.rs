//! Fib Billing CLI - Command-line calculator for Fibonacci-term billing
//!
//! Prints term lengths, single-cycle prices, schedules and summaries for a
//! subscription whose renewal terms follow the Fibonacci sequence.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use fib_billing_cli::{
    commands,
    config::{FibBillingCliConfig, PricingOverrides},
    utils::formatting::{format_json_error, parse_output_format},
    OutputFormat,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fib-billing",
    version,
    about = "Fibonacci-term subscription billing calculator",
    author = "Tally Team"
)]
struct Cli {
    /// Monthly price before discount
    #[arg(long, global = true)]
    base_price: Option<f64>,

    /// Discount fraction per month beyond the first (e.g., 0.05 = 5%)
    #[arg(long, global = true)]
    discount_rate: Option<f64>,

    /// Cap term lengths at this many months
    #[arg(long, global = true)]
    max_term: Option<u64>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the term length for the cycle after N completed cycles
    Term {
        /// Completed cycles (0 = first bill)
        #[arg(long, allow_negative_numbers = true)]
        cycle: i64,
    },

    /// Price the bill after N completed cycles
    Next {
        /// Completed cycles (0 = first bill)
        #[arg(long, allow_negative_numbers = true)]
        cycle: i64,
    },

    /// List consecutive billing cycles
    Schedule {
        /// Number of cycles to list
        #[arg(long)]
        cycles: Option<u32>,

        /// Completed cycles before the first listed one
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start: i64,
    },

    /// Summarise the first N billing cycles
    Summary {
        /// Number of cycles to summarise
        #[arg(long)]
        cycles: Option<u32>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = FibBillingCliConfig::new();

    // Use configuration with CLI overrides
    let default_output_format = parse_output_format(&config.default_output_format)?;
    let output_format = cli.output.unwrap_or(default_output_format);

    match execute_command(&cli, &config, output_format) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            match output_format {
                OutputFormat::Human => eprintln!("Error: {e}"),
                OutputFormat::Json => println!("{}", format_json_error(&e)),
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

fn execute_command(
    cli: &Cli,
    config: &FibBillingCliConfig,
    output_format: OutputFormat,
) -> Result<String> {
    let overrides = PricingOverrides {
        base_price: cli.base_price,
        discount_rate: cli.discount_rate,
        max_term: cli.max_term,
    };
    let engine = config.build_engine(&overrides)?;

    match &cli.command {
        Commands::Term { cycle } => commands::execute_term(&engine, *cycle, output_format),
        Commands::Next { cycle } => commands::execute_next(&engine, *cycle, output_format),
        Commands::Schedule { cycles, start } => commands::execute_schedule(
            &engine,
            *start,
            cycles.unwrap_or(config.default_cycles),
            output_format,
        ),
        Commands::Summary { cycles } => commands::execute_summary(
            &engine,
            cycles.unwrap_or(config.default_cycles),
            output_format,
        ),
    }
}
