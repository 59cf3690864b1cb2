//! Roster processing settings.

use serde::{Deserialize, Serialize};

/// Roster size at which summaries and batch derivations switch to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// How roster-wide computations are dispatched.
///
/// Results never depend on these settings; only the thread count does.
/// Missing fields deserialize to their defaults, so a `[metrics]` table in
/// a config file may set just one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Allow rayon for large rosters (needs the `parallel` feature).
    pub parallel: bool,

    /// Smallest roster that is worth splitting across threads.
    pub parallel_threshold: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl MetricsConfig {
    /// Default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Never leaves the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Turns rayon dispatch on or off.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the smallest roster dispatched to rayon.
    #[must_use]
    pub fn with_threshold(mut self, startups: usize) -> Self {
        self.parallel_threshold = startups;
        self
    }

    /// True when a roster of `startups` records should go to rayon.
    #[must_use]
    pub fn should_parallelize(&self, startups: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && startups >= self.parallel_threshold
    }
}
