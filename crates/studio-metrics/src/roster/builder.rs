//! Roster builder for fluent construction.

use super::Roster;
use crate::types::StartupRecord;
use crate::MetricsResult;

/// Builder for constructing a [`Roster`].
///
/// # Example
///
/// ```rust,ignore
/// use studio_metrics::prelude::*;
///
/// let roster = RosterBuilder::new()
///     .add_startup(scale_lens)
///     .add_startup(health_ai)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterBuilder {
    records: Vec<StartupRecord>,
}

impl RosterBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a startup to the roster.
    #[must_use]
    pub fn add_startup(mut self, record: StartupRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Adds multiple startups to the roster.
    #[must_use]
    pub fn add_startups(mut self, records: impl IntoIterator<Item = StartupRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Builds the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if an ID is blank or repeated.
    pub fn build(self) -> MetricsResult<Roster> {
        Roster::from_records(self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskLevel;
    use crate::MetricsError;
    use rust_decimal_macros::dec;

    fn startup(id: &str, industry: &str) -> StartupRecord {
        StartupRecord::builder()
            .id(id)
            .name(id)
            .industry(industry)
            .revenue(dec!(100))
            .customer_acquisition_cost(dec!(10))
            .lifetime_value(dec!(50))
            .runway(12.0)
            .risk_level(RiskLevel::Low)
            .build()
            .unwrap()
    }

    #[test]
    fn test_basic_build() {
        let roster = RosterBuilder::new()
            .add_startup(startup("1", "SaaS"))
            .add_startups(vec![startup("2", "AgTech"), startup("3", "SaaS")])
            .build()
            .unwrap();

        assert_eq!(roster.len(), 3);
        let ids: Vec<&str> = roster.into_iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_build() {
        let roster = Roster::builder().build().unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_duplicate_build() {
        let err = RosterBuilder::new()
            .add_startup(startup("1", "SaaS"))
            .add_startup(startup("1", "AgTech"))
            .build()
            .unwrap_err();
        assert!(matches!(err, MetricsError::DuplicateId { .. }));
    }
}
