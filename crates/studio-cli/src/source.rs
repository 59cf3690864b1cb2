//! Startup data sources.
//!
//! - JSON: an array of startup records
//! - CSV: one record per row, `nextSteps` separated by `|`
//! - Bundled sample roster when nothing is configured

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use studio_metrics::{RiskLevel, Roster, StartupRecord};
use tracing::{debug, info};

use crate::config::StudioConfig;
use crate::error::{CliError, CliResult};
use crate::sample::sample_roster;

/// Separator between next steps in a CSV cell.
pub const NEXT_STEP_SEPARATOR: char = '|';

/// Loads the roster from `--input`, the configured data file, or the sample.
pub fn load_roster(input: Option<&Path>, config: &StudioConfig) -> CliResult<Roster> {
    let path = input.or(config.data_file.as_deref());

    let Some(path) = path else {
        info!("No data file given, using the bundled sample roster");
        return sample_roster();
    };

    let roster = read_roster(path)?;
    debug!(path = %path.display(), startups = roster.len(), "Loaded roster");
    Ok(roster)
}

/// Reads a roster file, choosing the parser by extension.
pub fn read_roster(path: &Path) -> CliResult<Roster> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let records = match extension.as_deref() {
        Some("json") => read_json(path)?,
        Some("csv") => read_csv(path)?,
        _ => return Err(CliError::UnsupportedInput(path.display().to_string())),
    };

    Roster::from_records(records).map_err(|e| CliError::input(path, e))
}

fn read_json(path: &Path) -> CliResult<Vec<StartupRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::input(path, e))?;
    serde_json::from_str(&content).map_err(|e| CliError::input(path, e))
}

/// Flat CSV row; next steps live in a single cell.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartupRow {
    id: String,
    name: String,
    industry: String,
    stage: String,
    revenue: Decimal,
    burn: Decimal,
    runway: f64,
    #[serde(alias = "cac")]
    customer_acquisition_cost: Decimal,
    #[serde(alias = "ltv")]
    lifetime_value: Decimal,
    #[serde(alias = "users")]
    user_count: u64,
    #[serde(alias = "churn")]
    churn_rate: f64,
    growth_rate: f64,
    risk_level: RiskLevel,
    #[serde(default)]
    next_steps: Option<String>,
}

impl From<StartupRow> for StartupRecord {
    fn from(row: StartupRow) -> Self {
        let next_steps = row
            .next_steps
            .as_deref()
            .unwrap_or_default()
            .split(NEXT_STEP_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        StartupRecord {
            id: row.id,
            name: row.name,
            industry: row.industry,
            stage: row.stage,
            revenue: row.revenue,
            burn: row.burn,
            runway: row.runway,
            customer_acquisition_cost: row.customer_acquisition_cost,
            lifetime_value: row.lifetime_value,
            user_count: row.user_count,
            churn_rate: row.churn_rate,
            growth_rate: row.growth_rate,
            risk_level: row.risk_level,
            next_steps,
        }
    }
}

fn read_csv(path: &Path) -> CliResult<Vec<StartupRecord>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| CliError::input(path, e))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let row: StartupRow = result.map_err(|e| CliError::input(path, e))?;
        records.push(StartupRecord::from(row));
    }
    Ok(records)
}
