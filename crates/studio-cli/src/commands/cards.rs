//! Cards command implementation.
//!
//! One row per startup. A record whose metrics cannot be derived still gets
//! a row, with its derived columns marked unavailable.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use studio_metrics::{derive_views, DerivedStartupView, GrowthDirection, StartupRecord, StyleTone};
use tabled::Tabled;

use crate::commands::{Context, InputArgs};
use crate::output::{format_money, print_note, print_output, METRICS_UNAVAILABLE};

/// Arguments for the cards command.
#[derive(Args, Debug)]
pub struct CardsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// A startup card row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CardRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Industry")]
    pub industry: String,
    #[tabled(rename = "Stage")]
    pub stage: String,
    #[tabled(rename = "Revenue")]
    pub revenue: String,
    #[tabled(rename = "Growth")]
    pub growth: String,
    #[tabled(rename = "Runway")]
    pub runway: String,
    #[tabled(rename = "Health")]
    pub health: String,
    #[tabled(rename = "LTV/CAC")]
    pub ltv_to_cac: String,
    #[tabled(rename = "Risk")]
    pub risk: String,
    #[tabled(rename = "Next Step")]
    pub next_step: String,
}

impl CardRow {
    /// Builds a row from a record and its derived view, if any.
    pub fn new(record: &StartupRecord, view: Option<&DerivedStartupView>) -> Self {
        let unavailable = || METRICS_UNAVAILABLE.to_string();

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            industry: record.industry.clone(),
            stage: record.stage.clone(),
            revenue: format_money(record.revenue),
            growth: GrowthDirection::signed_label(record.growth_rate),
            runway: view.map_or_else(unavailable, |v| {
                format!("{} mo ({}%)", v.runway_months, v.runway_progress_value)
            }),
            health: view.map_or_else(unavailable, |v| v.runway_health_tier.label().to_string()),
            ltv_to_cac: view.map_or_else(unavailable, DerivedStartupView::ltv_to_cac_label),
            risk: record.risk_level.to_string(),
            next_step: record.headline_step().unwrap_or("-").to_string(),
        }
    }
}

/// Execute the cards command.
pub fn execute(args: CardsArgs, ctx: &Context) -> Result<()> {
    let roster = args.input.load(ctx)?;
    let batch = derive_views(roster.records(), &ctx.config.metrics);

    let rows: Vec<CardRow> = roster
        .records()
        .iter()
        .zip(&batch.outcomes)
        .map(|(record, outcome)| CardRow::new(record, outcome.view()))
        .collect();

    print_output(&rows, ctx.format)?;

    for (id, err) in batch.failures() {
        print_note(StyleTone::Warning, &format!("{id}: {METRICS_UNAVAILABLE} ({err})"));
    }

    Ok(())
}
