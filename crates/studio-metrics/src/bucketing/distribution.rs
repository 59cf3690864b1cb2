//! Grouping startups into buckets with per-bucket aggregates.

use crate::types::{RiskLevel, RunwayHealthTier, StartupRecord};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Aggregated metrics for one bucket of startups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketMetrics {
    /// Number of startups in this bucket.
    pub count: usize,

    /// Monthly revenue of the bucket.
    pub total_revenue: Decimal,

    /// Share of the collection's revenue, percent (0-100).
    pub revenue_weight_pct: f64,

    /// Users across the bucket.
    pub total_users: u64,

    /// Mean growth rate of the bucket.
    pub average_growth_rate: f64,
}

impl BucketMetrics {
    /// Returns true if this bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Startups grouped by a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution<K: Eq + Hash> {
    /// Metrics by bucket key.
    pub buckets: HashMap<K, BucketMetrics>,

    /// Revenue across all buckets.
    pub total_revenue: Decimal,
}

impl<K: Eq + Hash> Default for Distribution<K> {
    fn default() -> Self {
        Self {
            buckets: HashMap::new(),
            total_revenue: Decimal::ZERO,
        }
    }
}

impl<K: Eq + Hash + Clone + Ord> Distribution<K> {
    /// Returns metrics for one key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&BucketMetrics> {
        self.buckets.get(key)
    }

    /// Number of non-empty buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if nothing was bucketed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets sorted by revenue weight descending, ties broken by key.
    #[must_use]
    pub fn sorted_by_weight(&self) -> Vec<(K, &BucketMetrics)> {
        let mut result: Vec<_> = self.buckets.iter().map(|(k, m)| (k.clone(), m)).collect();
        result.sort_by(|a, b| {
            b.1.revenue_weight_pct
                .partial_cmp(&a.1.revenue_weight_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        result
    }
}

/// Groups records by `classify` and aggregates each group.
///
/// Revenue weights are 0 for every bucket when total revenue is zero.
/// Revenue totals saturate at [`Decimal::MAX`].
pub fn bucket_by<K, F>(records: &[StartupRecord], classify: F) -> Distribution<K>
where
    K: Eq + Hash,
    F: Fn(&StartupRecord) -> K,
{
    if records.is_empty() {
        return Distribution::default();
    }

    let total_revenue = saturating_revenue(records.iter());

    let mut grouped: HashMap<K, Vec<&StartupRecord>> = HashMap::new();
    for record in records {
        grouped.entry(classify(record)).or_default().push(record);
    }

    let buckets = grouped
        .into_iter()
        .map(|(key, group)| (key, aggregate_bucket(&group, total_revenue)))
        .collect();

    Distribution {
        buckets,
        total_revenue,
    }
}

fn saturating_revenue<'a>(records: impl Iterator<Item = &'a StartupRecord>) -> Decimal {
    records.fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.revenue))
}

fn aggregate_bucket(group: &[&StartupRecord], total_revenue: Decimal) -> BucketMetrics {
    let count = group.len();
    let revenue = saturating_revenue(group.iter().copied());
    let total_users = group
        .iter()
        .fold(0_u64, |acc, r| acc.saturating_add(r.user_count));
    let growth_sum: f64 = group.iter().map(|r| r.growth_rate).sum();

    let revenue_weight_pct = if total_revenue.is_zero() {
        0.0
    } else {
        (revenue / total_revenue * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    };

    BucketMetrics {
        count,
        total_revenue: revenue,
        revenue_weight_pct,
        total_users,
        average_growth_rate: if count == 0 {
            0.0
        } else {
            growth_sum / count as f64
        },
    }
}

/// Buckets startups by industry label (exact, case-sensitive).
#[must_use]
pub fn bucket_by_industry(records: &[StartupRecord]) -> Distribution<String> {
    bucket_by(records, |r| r.industry.clone())
}

/// Buckets startups by risk level.
#[must_use]
pub fn bucket_by_risk_level(records: &[StartupRecord]) -> Distribution<RiskLevel> {
    bucket_by(records, |r| r.risk_level)
}

/// Buckets startups by runway health tier.
#[must_use]
pub fn bucket_by_runway_tier(records: &[StartupRecord]) -> Distribution<RunwayHealthTier> {
    bucket_by(records, |r| RunwayHealthTier::from_runway(r.runway))
}
