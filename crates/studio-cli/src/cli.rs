//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{BucketsArgs, CardsArgs, ConfigArgs, ShowArgs, SummaryArgs};

/// Founder Studio - startup metrics dashboard for the terminal
#[derive(Parser)]
#[command(name = "studio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then table)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "STUDIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Portfolio overview (revenue, users, growth, industries)
    Summary(SummaryArgs),

    /// One card per startup with runway, LTV/CAC and risk
    Cards(CardsArgs),

    /// Full card for a single startup
    Show(ShowArgs),

    /// Group startups by industry, risk level or runway tier
    Buckets(BucketsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (one line per item)
    Minimal,
}
