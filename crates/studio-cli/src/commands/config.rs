//! Config command implementation.
//!
//! Shows the effective configuration and writes a starter file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use studio_metrics::StyleTone;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::config::{default_path, StudioConfig, DEFAULT_LOG_FILTER};
use crate::output::{print_note, print_output, print_pairs, print_section, print_single, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init(InitArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the file (defaults to the standard location)
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Init(init_args) => execute_init(init_args),
        ConfigCommand::Path => execute_path(ctx),
    }
}

/// Show the effective configuration.
fn execute_show(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    let results = vec![
        KeyValue::new(
            "source",
            ctx.config_path
                .as_ref()
                .map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string()),
        ),
        KeyValue::new(
            "data_file",
            config
                .data_file
                .as_ref()
                .map_or_else(|| "(sample roster)".to_string(), |p| p.display().to_string()),
        ),
        KeyValue::new("format", format!("{:?}", ctx.format).to_lowercase()),
        KeyValue::new(
            "log_filter",
            config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER),
        ),
        KeyValue::new("metrics.parallel", config.metrics.parallel.to_string()),
        KeyValue::new(
            "metrics.parallel_threshold",
            config.metrics.parallel_threshold.to_string(),
        ),
    ];

    match ctx.format {
        OutputFormat::Table => {
            print_section("Current Configuration");
            print_output(&results, ctx.format)?;
        }
        OutputFormat::Json => print_single(config, ctx.format)?,
        OutputFormat::Csv => print_output(&results, ctx.format)?,
        OutputFormat::Minimal => print_pairs(&results),
    }

    Ok(())
}

/// Write a default configuration file.
fn execute_init(args: InitArgs) -> Result<()> {
    let path = args
        .path
        .or_else(default_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        ));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = format!(
        "# Founder Studio configuration\n\n{}",
        StudioConfig::template().to_toml()?
    );
    std::fs::write(&path, content)?;

    print_note(StyleTone::Accent, &format!("wrote {}", path.display()));
    Ok(())
}

/// Show configuration file path.
fn execute_path(ctx: &Context) -> Result<()> {
    let path = ctx.config_path.clone().or_else(default_path);
    match path {
        Some(p) if p.exists() => println!("{} (exists)", p.display()),
        Some(p) => println!("{} (not created yet, using defaults)", p.display()),
        None => println!("(no config directory)"),
    }
    Ok(())
}
