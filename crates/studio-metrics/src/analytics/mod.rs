//! Startup metrics analytics.
//!
//! - Portfolio summary (total revenue, users, average growth, industries)
//! - Per-startup derived views (runway tier, progress, LTV/CAC, growth sign)
//! - Batch derivation that reports bad records without aborting the batch
//!
//! All functions are pure - they take records and configuration as input
//! and return computed results. No caching, no I/O, no side effects.

mod batch;
mod parallel;
mod summary;
mod view;

pub use batch::*;
pub use parallel::*;
pub use summary::*;
pub use view::*;
