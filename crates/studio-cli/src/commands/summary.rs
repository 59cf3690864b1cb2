//! Summary command implementation.
//!
//! Prints the dashboard's overview cards for the whole roster.

use anyhow::Result;
use clap::Args;
use studio_metrics::summarize_portfolio;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::{Context, InputArgs};
use crate::output::{format_percent, print_output, print_pairs, print_section, print_single, KeyValue};

/// Arguments for the summary command.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute the summary command.
pub fn execute(args: SummaryArgs, ctx: &Context) -> Result<()> {
    let roster = args.input.load(ctx)?;
    let summary = summarize_portfolio(roster.records(), &ctx.config.metrics);
    debug!(startups = summary.startup_count, "Summarized portfolio");

    let results = vec![
        KeyValue::new("Startups", summary.startup_count.to_string()),
        KeyValue::from_money("Total Revenue", summary.total_revenue),
        KeyValue::from_money("Total Burn", summary.total_burn),
        KeyValue::new("Total Users", summary.total_users.to_string()),
        KeyValue::new("Avg Growth", format_percent(summary.average_growth_display())),
        KeyValue::new("Industries", summary.distinct_industry_count.to_string()),
    ];

    match ctx.format {
        OutputFormat::Table => {
            print_section("Portfolio Summary");
            print_output(&results, ctx.format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_single(&summary, ctx.format)?,
        OutputFormat::Minimal => print_pairs(&results),
    }

    Ok(())
}
