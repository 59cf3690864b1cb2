//! CLI command implementations.

pub mod buckets;
pub mod cards;
pub mod config;
pub mod show;
pub mod summary;

// Re-export submodules for convenience
pub use buckets::BucketsArgs;
pub use cards::CardsArgs;
pub use config::ConfigArgs;
pub use show::ShowArgs;
pub use summary::SummaryArgs;

use std::path::PathBuf;

use clap::Args;
use studio_metrics::Roster;

use crate::cli::OutputFormat;
use crate::config::StudioConfig;
use crate::error::CliResult;
use crate::source::load_roster;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved output format.
    pub format: OutputFormat,
    /// Effective configuration.
    pub config: StudioConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
}

/// Data file argument shared by data commands.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Startup data file (.json or .csv). Defaults to the configured data file.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Loads the roster this command should work on.
    pub fn load(&self, ctx: &Context) -> CliResult<Roster> {
        load_roster(self.input.as_deref(), &ctx.config)
    }
}
