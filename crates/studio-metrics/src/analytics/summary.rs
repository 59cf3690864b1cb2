//! Portfolio-level summary across all tracked startups.

use super::parallel::maybe_parallel_fold;
use crate::types::{MetricsConfig, StartupRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Aggregates over a collection of startups.
///
/// An empty collection yields an all-zero summary; in particular
/// `average_growth_rate` is `0.0` rather than NaN. Money and user totals
/// saturate at their type's maximum instead of overflowing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of startups summarized.
    pub startup_count: usize,

    /// Sum of monthly revenue.
    pub total_revenue: Decimal,

    /// Sum of monthly burn.
    pub total_burn: Decimal,

    /// Sum of user counts.
    pub total_users: u64,

    /// Arithmetic mean of growth rates (percent). 0.0 when empty.
    pub average_growth_rate: f64,

    /// Number of distinct industry labels (exact, case-sensitive match).
    pub distinct_industry_count: usize,
}

impl PortfolioSummary {
    /// Summarizes a collection of startups.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let summary = PortfolioSummary::calculate(roster.records(), &MetricsConfig::default());
    /// println!("${}/mo across {} industries", summary.total_revenue, summary.distinct_industry_count);
    /// ```
    #[must_use]
    pub fn calculate(records: &[StartupRecord], config: &MetricsConfig) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let (total_revenue, total_burn, total_users, growth_sum) = maybe_parallel_fold(
            records,
            config,
            (Decimal::ZERO, Decimal::ZERO, 0_u64, 0.0_f64),
            |(revenue, burn, users, growth), r| {
                (
                    revenue.saturating_add(r.revenue),
                    burn.saturating_add(r.burn),
                    users.saturating_add(r.user_count),
                    growth + r.growth_rate,
                )
            },
            |(a, b, c, d), (e, f, g, h)| {
                (
                    a.saturating_add(e),
                    b.saturating_add(f),
                    c.saturating_add(g),
                    d + h,
                )
            },
        );

        let distinct_industry_count = records
            .iter()
            .map(|r| r.industry.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            startup_count: records.len(),
            total_revenue,
            total_burn,
            total_users,
            average_growth_rate: growth_sum / records.len() as f64,
            distinct_industry_count,
        }
    }

    /// Returns true if no startups were summarized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.startup_count == 0
    }

    /// Average growth rounded to one decimal for display.
    #[must_use]
    pub fn average_growth_display(&self) -> f64 {
        (self.average_growth_rate * 10.0).round() / 10.0
    }
}

/// Convenience function to summarize a collection of startups.
///
/// See [`PortfolioSummary::calculate`].
#[must_use]
pub fn summarize_portfolio(records: &[StartupRecord], config: &MetricsConfig) -> PortfolioSummary {
    PortfolioSummary::calculate(records, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskLevel;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn record(id: &str, industry: &str, revenue: Decimal, users: u64, growth: f64) -> StartupRecord {
        StartupRecord::builder()
            .id(id)
            .name(format!("Startup {id}"))
            .industry(industry)
            .revenue(revenue)
            .burn(dec!(1000))
            .runway(10.0)
            .customer_acquisition_cost(dec!(50))
            .lifetime_value(dec!(500))
            .user_count(users)
            .growth_rate(growth)
            .risk_level(RiskLevel::Low)
            .build()
            .unwrap()
    }

    fn dashboard_records() -> Vec<StartupRecord> {
        vec![
            record("1", "SaaS", dec!(12000), 1250, 12.5),
            record("2", "HealthTech", dec!(8500), 950, 8.3),
            record("3", "AgTech", dec!(45000), 3800, 23.1),
        ]
    }

    #[test]
    fn test_dashboard_summary() {
        let summary = summarize_portfolio(&dashboard_records(), &MetricsConfig::default());

        assert_eq!(summary.startup_count, 3);
        assert_eq!(summary.total_revenue, dec!(65500));
        assert_eq!(summary.total_burn, dec!(3000));
        assert_eq!(summary.total_users, 6000);
        assert_relative_eq!(summary.average_growth_rate, 14.633_333_333, epsilon = 1e-6);
        assert_eq!(summary.distinct_industry_count, 3);
        assert_relative_eq!(summary.average_growth_display(), 14.6);
    }

    #[test]
    fn test_empty_is_all_zero() {
        let summary = summarize_portfolio(&[], &MetricsConfig::default());

        assert!(summary.is_empty());
        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.total_users, 0);
        assert_eq!(summary.average_growth_rate, 0.0);
        assert!(!summary.average_growth_rate.is_nan());
        assert_eq!(summary.distinct_industry_count, 0);
    }

    #[test]
    fn test_huge_revenue_saturates() {
        let near_max = Decimal::MAX - dec!(1);
        let records = vec![
            record("1", "SaaS", near_max, u64::MAX, 1.0),
            record("2", "SaaS", near_max, 1, 2.0),
            record("3", "AgTech", near_max, 1, 3.0),
        ];

        for config in [MetricsConfig::sequential(), MetricsConfig::new().with_threshold(1)] {
            let summary = summarize_portfolio(&records, &config);
            assert_eq!(summary.startup_count, 3);
            assert_eq!(summary.total_revenue, Decimal::MAX);
            assert_eq!(summary.total_burn, dec!(3000));
            assert_eq!(summary.total_users, u64::MAX);
            assert_relative_eq!(summary.average_growth_rate, 2.0);
        }
    }

    #[test]
    fn test_industries_case_sensitive() {
        let records = vec![
            record("1", "SaaS", dec!(1), 1, 1.0),
            record("2", "saas", dec!(1), 1, 1.0),
            record("3", "SaaS", dec!(1), 1, 1.0),
        ];
        let summary = summarize_portfolio(&records, &MetricsConfig::default());
        assert_eq!(summary.distinct_industry_count, 2);
    }

    #[test]
    fn test_negative_growth_mean() {
        let records = vec![
            record("1", "A", dec!(1), 1, -10.0),
            record("2", "B", dec!(1), 1, 4.0),
        ];
        let summary = summarize_portfolio(&records, &MetricsConfig::default());
        assert_relative_eq!(summary.average_growth_rate, -3.0);
    }

    #[test]
    fn test_permutation_invariant() {
        let mut records = dashboard_records();
        let forward = summarize_portfolio(&records, &MetricsConfig::sequential());
        records.reverse();
        let backward = summarize_portfolio(&records, &MetricsConfig::sequential());

        assert_eq!(forward.total_revenue, backward.total_revenue);
        assert_eq!(forward.total_users, backward.total_users);
        assert_eq!(forward.distinct_industry_count, backward.distinct_industry_count);
        assert_relative_eq!(forward.average_growth_rate, backward.average_growth_rate);
    }
}
