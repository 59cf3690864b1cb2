//! Startup bucketing.
//!
//! Groups a collection of startups by industry, risk level or runway tier
//! and aggregates revenue, users and growth per bucket.
//!
//! # Example
//!
//! ```rust,ignore
//! use studio_metrics::bucketing::*;
//!
//! let by_industry = bucket_by_industry(roster.records());
//! for (industry, metrics) in by_industry.sorted_by_weight() {
//!     println!("{}: {:.1}% of revenue", industry, metrics.revenue_weight_pct);
//! }
//! ```

mod distribution;

pub use distribution::{
    bucket_by, bucket_by_industry, bucket_by_risk_level, bucket_by_runway_tier, BucketMetrics,
    Distribution,
};
