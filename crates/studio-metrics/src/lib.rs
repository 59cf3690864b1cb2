//! # Studio Metrics
//!
//! Startup metrics aggregation and risk classification for the Founder
//! Studio dashboard.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Records in, values out**: The caller supplies [`StartupRecord`]s; nothing is mutated or stored
//! - **Closed classifications**: Risk levels, runway tiers and style tones are enums, not string maps
//! - **Per-record failures**: A bad record fails on its own; batches keep going
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use studio_metrics::prelude::*;
//!
//! let roster = Roster::from_records(records)?;
//! let config = MetricsConfig::default();
//!
//! let summary = summarize_portfolio(roster.records(), &config);
//! let batch = derive_views(roster.records(), &config);
//! for (id, err) in batch.failures() {
//!     eprintln!("{id}: metrics unavailable ({err})");
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Portfolio summary, per-startup views, batch derivation
//! - [`bucketing`] - Distribution by industry, risk level, runway tier
//! - [`roster`] - Validated startup collection and selection context
//! - [`types`] - Startup record, classifications, config
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large rosters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod bucketing;
pub mod error;
pub mod roster;
pub mod types;

pub use error::{MetricsError, MetricsResult};

pub use types::{
    GrowthDirection, MetricsConfig, RiskLevel, RunwayHealthTier, StartupRecord,
    StartupRecordBuilder, StyleTone,
};

pub use roster::{BasicStartup, Roster, RosterBuilder, StartupSelection};

pub use analytics::{
    derive_view, derive_views, summarize_portfolio, BatchDerivation, DerivedStartupView,
    PortfolioSummary, RecordOutcome,
};

pub use bucketing::{
    bucket_by, bucket_by_industry, bucket_by_risk_level, bucket_by_runway_tier, BucketMetrics,
    Distribution,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use studio_metrics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MetricsError, MetricsResult};

    pub use crate::types::{
        GrowthDirection, MetricsConfig, RiskLevel, RunwayHealthTier, StartupRecord,
        StartupRecordBuilder, StyleTone,
    };

    pub use crate::roster::{BasicStartup, Roster, RosterBuilder, StartupSelection};

    pub use crate::analytics::{
        derive_view, derive_views, summarize_portfolio, BatchDerivation, DerivedStartupView,
        PortfolioSummary, RecordOutcome,
    };

    pub use crate::bucketing::{
        bucket_by_industry, bucket_by_risk_level, bucket_by_runway_tier, BucketMetrics,
        Distribution,
    };

    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
