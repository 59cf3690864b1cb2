//! Show command implementation.
//!
//! Selects one startup by id and prints its full card.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use studio_metrics::{DerivedStartupView, StartupRecord, StartupSelection};
use tracing::warn;

use crate::cli::OutputFormat;
use crate::commands::{Context, InputArgs};
use crate::output::{
    format_percent, paint, print_output, print_pairs, print_section, print_single,
    KeyValue, METRICS_UNAVAILABLE,
};

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Startup ID
    pub id: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Full card for JSON output.
#[derive(Debug, Serialize)]
struct StartupCard<'a> {
    record: &'a StartupRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<DerivedStartupView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the show command.
pub fn execute(args: ShowArgs, ctx: &Context) -> Result<()> {
    let roster = args.input.load(ctx)?;
    let selection = StartupSelection::with_id(&roster, &args.id)?;
    let record = selection.current();

    let derived = selection.view();
    if let Err(e) = &derived {
        warn!(id = %record.id, error = %e, "metrics unavailable");
    }

    match ctx.format {
        OutputFormat::Json => {
            let card = StartupCard {
                record,
                error: derived.as_ref().err().map(ToString::to_string),
                view: derived.ok(),
            };
            print_single(&card, ctx.format)?;
        }
        OutputFormat::Csv => {
            let pairs = card_pairs(record, derived.as_ref().ok());
            print_output(&pairs, ctx.format)?;
        }
        OutputFormat::Minimal => print_pairs(&card_pairs(record, derived.as_ref().ok())),
        OutputFormat::Table => {
            let view = derived.as_ref().ok();
            print_section(&format!("{} ({})", record.name, record.stage));
            print_output(&card_pairs(record, view), ctx.format)?;

            if let Some(view) = view {
                let tier = view.runway_health_tier;
                println!(
                    "Runway: {}  Risk: {}",
                    paint(tier.label(), tier.tone()),
                    paint(record.risk_level.code(), view.risk_style_bucket)
                );
            }

            print_section("Next Steps");
            if record.next_steps.is_empty() {
                println!("No next steps.");
            }
            for (i, step) in record.next_steps.iter().enumerate() {
                println!("{}. {}", i + 1, step);
            }
        }
    }

    Ok(())
}

fn card_pairs(record: &StartupRecord, view: Option<&DerivedStartupView>) -> Vec<KeyValue> {
    let mut pairs = vec![
        KeyValue::new("ID", record.id.clone()),
        KeyValue::new("Name", record.name.clone()),
        KeyValue::new("Industry", record.industry.clone()),
        KeyValue::new("Stage", record.stage.clone()),
        KeyValue::from_money("Revenue", record.revenue),
        KeyValue::from_money("Burn", record.burn),
        KeyValue::new("Users", record.user_count.to_string()),
        KeyValue::new("Churn", format_percent(record.churn_rate)),
        KeyValue::new(
            "Growth",
            studio_metrics::GrowthDirection::signed_label(record.growth_rate),
        ),
        KeyValue::from_money("CAC", record.customer_acquisition_cost),
        KeyValue::from_money("LTV", record.lifetime_value),
        KeyValue::new("Risk", record.risk_level.to_string()),
    ];

    match view {
        Some(v) => pairs.extend([
            KeyValue::new("Runway", format!("{} months", v.runway_months)),
            KeyValue::new("Runway Health", v.runway_health_tier.label()),
            KeyValue::new("Runway Progress", format!("{}%", v.runway_progress_value)),
            KeyValue::new("LTV/CAC", v.ltv_to_cac_label()),
        ]),
        None => pairs.push(KeyValue::new("Derived", METRICS_UNAVAILABLE)),
    }

    pairs
}
