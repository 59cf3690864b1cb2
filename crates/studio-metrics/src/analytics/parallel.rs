//! Sequential/parallel dispatch for roster-wide computations.
//!
//! Rosters at or above [`MetricsConfig::parallel_threshold`] are processed
//! with rayon when the `parallel` feature is enabled; everything else runs
//! on the calling thread.

use crate::types::MetricsConfig;
use tracing::debug;

/// Maps `f` over `items`, in parallel when the config allows it.
///
/// Output order always matches input order.
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &MetricsConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            debug!(count = items.len(), "parallel map");
            return items.par_iter().map(f).collect();
        }
    }

    debug!(count = items.len(), "sequential map");
    items.iter().map(f).collect()
}

/// Folds `items` into an accumulator, in parallel when the config allows it.
///
/// `fold` folds one item into a partial accumulator; `reduce` merges two
/// partials. For a sequential run only `fold` is used, so both must agree
/// for the result to be independent of the dispatch path.
///
/// ```ignore
/// let (revenue, users) = maybe_parallel_fold(
///     &records,
///     &config,
///     (Decimal::ZERO, 0_u64),
///     |(revenue, users), r| (revenue + r.revenue, users + r.user_count),
///     |(a, b), (c, d)| (a + c, b + d),
/// );
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_fold<T, U, F, R>(
    items: &[T],
    config: &MetricsConfig,
    identity: U,
    fold: F,
    reduce: R,
) -> U
where
    T: Sync,
    U: Send + Sync + Clone,
    F: Fn(U, &T) -> U + Sync + Send,
    R: Fn(U, U) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            debug!(count = items.len(), "parallel fold");
            return items
                .par_iter()
                .fold(|| identity.clone(), &fold)
                .reduce(|| identity.clone(), reduce);
        }
    }

    items.iter().fold(identity, fold)
}
