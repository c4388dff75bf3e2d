//! Command implementations for HPD CLI.
//!
//! Provides subcommands for validating a filter selection, scaling numeric
//! series, and summarizing a saved production dynamics response.

use clap::Subcommand;
use hpd_core::calendar_month::CalendarMonth;
use hpd_core::vocabulary::{AggregationStep, FluidType, SedimentComplex, Unit};
use std::path::PathBuf;

pub mod format;
pub mod summarize;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// Validate a filter selection and print the request body it produces
    Validate {
        /// Comma-separated field IDs (positive)
        #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u32).range(1..))]
        fields: Vec<u32>,

        /// Comma-separated sediment complexes (turon, senoman, neokom, achimov)
        #[arg(long, value_delimiter = ',')]
        complexes: Vec<SedimentComplex>,

        /// Fluid type (gas, oil, condensate)
        #[arg(long, default_value = "gas")]
        fluid: FluidType,

        /// First month of the range (YYYY-MM)
        #[arg(long)]
        from: Option<CalendarMonth>,

        /// Last month of the range, inclusive (YYYY-MM)
        #[arg(long)]
        to: Option<CalendarMonth>,

        /// Aggregation step (monthly, quarterly, yearly)
        #[arg(long, default_value = "yearly")]
        step: AggregationStep,
    },

    /// Scale a series of values with one shared tier
    Format {
        /// Base unit (tons, "cubic meters")
        #[arg(long, default_value = "tons")]
        unit: Unit,

        /// Raw values in base units
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Print the scale and scaled values as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a production dynamics response saved as JSON
    Summarize {
        /// Path to the response JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Chart running totals instead of per-period values
        #[arg(long)]
        cumulative: bool,

        /// Print the summary and statistic cards as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Validate {
            fields,
            complexes,
            fluid,
            from,
            to,
            step,
        } => {
            let selection = hpd_core::filter::FilterSelection::default()
                .with_fields(fields)
                .with_complexes(complexes)
                .with_fluid(fluid)
                .with_range(from, to)
                .with_step(step);
            validate::run_validate(&selection)
        }
        Command::Format { unit, values, json } => format::run_format(&values, unit, json),
        Command::Summarize {
            input,
            cumulative,
            json,
        } => summarize::run_summarize(&input, cumulative, json),
    }
}
