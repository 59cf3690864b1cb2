//! Founder Studio CLI - startup metrics dashboard for the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Portfolio overview of the bundled sample roster
//! studio summary
//!
//! # Startup cards from a data file
//! studio cards --input startups.csv
//!
//! # One startup in full, as JSON
//! studio --format json show 2 --input startups.json
//!
//! # Revenue distribution by runway health
//! studio buckets --by runway
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod sample;
mod source;

use cli::{Cli, Commands};
use commands::Context;
use config::{StudioConfig, DEFAULT_LOG_FILTER};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_path) = StudioConfig::load(cli.config.as_deref())?;

    // Logs go to stderr; stdout carries command output only
    let directive = if cli.verbose {
        "info,studio=debug".to_string()
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .or_else(|| config.log_filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &config_path {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => debug!("Using default configuration"),
    }

    let ctx = Context {
        format: cli.format.or(config.format).unwrap_or_default(),
        config,
        config_path,
    };

    match cli.command {
        Commands::Summary(args) => commands::summary::execute(args, &ctx)?,
        Commands::Cards(args) => commands::cards::execute(args, &ctx)?,
        Commands::Show(args) => commands::show::execute(args, &ctx)?,
        Commands::Buckets(args) => commands::buckets::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
