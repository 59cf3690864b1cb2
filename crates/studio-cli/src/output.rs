//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use studio_metrics::StyleTone;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Placeholder shown where a record's derived metrics could not be computed.
pub const METRICS_UNAVAILABLE: &str = "metrics unavailable";

/// Prints rows in the chosen format.
///
/// Table output is a rounded table with the first column left-aligned;
/// minimal output is one compact JSON object per line.
pub fn print_output<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table if rows.is_empty() => println!("No startups."),
        OutputFormat::Table => {
            let mut table = Table::new(rows);
            table
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()));
            println!("{table}");
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => write_csv(rows)?,
        OutputFormat::Minimal => {
            for row in rows {
                println!("{}", serde_json::to_string(row)?);
            }
        }
    }
    Ok(())
}

/// Prints one value: a CSV record for `csv`, pretty JSON otherwise.
pub fn print_single<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => write_csv(std::slice::from_ref(value)),
        OutputFormat::Table | OutputFormat::Json | OutputFormat::Minimal => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        }
    }
}

fn write_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout().lock());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats a monthly money amount, e.g. `$12000`.
pub fn format_money(value: Decimal) -> String {
    format!("${}", value.round_dp(2).normalize())
}

/// Formats a percentage with one decimal, e.g. `14.6%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Colors text with a dashboard style tone.
pub fn paint(text: &str, tone: StyleTone) -> String {
    match tone {
        StyleTone::Accent => text.green().to_string(),
        StyleTone::Warning => text.yellow().to_string(),
        StyleTone::Error => text.red().to_string(),
    }
}

/// Writes a status note to stderr, keeping stdout for command output.
pub fn print_note(tone: StyleTone, message: &str) {
    let marker = match tone {
        StyleTone::Accent => "done:",
        StyleTone::Warning => "warning:",
        StyleTone::Error => "error:",
    };
    eprintln!("{} {message}", paint(marker, tone).bold());
}

/// One labelled line of a startup card, summary or config listing.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Field")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Value rendered with [`format_money`].
    pub fn from_money(key: impl Into<String>, value: Decimal) -> Self {
        Self::new(key, format_money(value))
    }
}

/// `key=value` lines, for `--format minimal` on single-record commands.
pub fn print_pairs(pairs: &[KeyValue]) {
    for KeyValue { key, value } in pairs {
        println!("{key}={value}");
    }
}

/// Underlined section title preceded by a blank line.
pub fn print_section(title: &str) {
    println!("\n{}", title.bold().underline());
}
