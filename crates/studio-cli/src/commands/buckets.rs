//! Buckets command implementation.
//!
//! Groups the roster by industry, risk level or runway tier.

use std::fmt::Display;
use std::hash::Hash;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use studio_metrics::Distribution;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{Context, InputArgs};
use crate::output::{format_money, format_percent, print_output, print_section};

/// Arguments for the buckets command.
#[derive(Args, Debug)]
pub struct BucketsArgs {
    /// Grouping key
    #[arg(short, long, value_enum, default_value = "industry")]
    pub by: BucketKey,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Grouping keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BucketKey {
    /// Industry label
    Industry,
    /// Risk level
    Risk,
    /// Runway health tier
    Runway,
}

/// One bucket row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct BucketRow {
    #[tabled(rename = "Bucket")]
    pub bucket: String,
    #[tabled(rename = "Startups")]
    pub count: usize,
    #[tabled(rename = "Revenue")]
    pub revenue: String,
    #[tabled(rename = "Weight")]
    pub weight: String,
    #[tabled(rename = "Users")]
    pub users: u64,
    #[tabled(rename = "Avg Growth")]
    pub average_growth: String,
}

fn rows<K>(dist: &Distribution<K>) -> Vec<BucketRow>
where
    K: Eq + Hash + Clone + Ord + Display,
{
    dist.sorted_by_weight()
        .into_iter()
        .map(|(key, m)| BucketRow {
            bucket: key.to_string(),
            count: m.count,
            revenue: format_money(m.total_revenue),
            weight: format_percent(m.revenue_weight_pct),
            users: m.total_users,
            average_growth: format_percent(m.average_growth_rate),
        })
        .collect()
}

/// Execute the buckets command.
pub fn execute(args: BucketsArgs, ctx: &Context) -> Result<()> {
    let roster = args.input.load(ctx)?;

    let (title, rows) = match args.by {
        BucketKey::Industry => ("By Industry", rows(&roster.by_industry())),
        BucketKey::Risk => ("By Risk Level", rows(&roster.by_risk_level())),
        BucketKey::Runway => ("By Runway Health", rows(&roster.by_runway_tier())),
    };

    if ctx.format == OutputFormat::Table {
        print_section(title);
    }
    print_output(&rows, ctx.format)?;

    Ok(())
}
