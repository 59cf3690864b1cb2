//! Domain types for startup metrics.
//!
//! - [`StartupRecord`]: One tracked company as supplied by the data source
//! - [`RiskLevel`], [`RunwayHealthTier`], [`GrowthDirection`]: Closed classifications
//! - [`StyleTone`]: The three-way style bucket every classification maps onto
//! - [`MetricsConfig`]: Configuration for metrics computation

mod config;
mod indicators;
mod startup;

pub use config::{MetricsConfig, DEFAULT_PARALLEL_THRESHOLD};
pub use indicators::{
    runway_progress, whole_months, GrowthDirection, RiskLevel, RunwayHealthTier, StyleTone,
    CRITICAL_RUNWAY_MONTHS, PROGRESS_MAX, PROGRESS_PER_MONTH, WARNING_RUNWAY_MONTHS,
};
pub use startup::{StartupRecord, StartupRecordBuilder};
