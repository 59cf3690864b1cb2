//! Roster struct and core methods.

use crate::analytics::{BatchDerivation, PortfolioSummary};
use crate::bucketing::{self, Distribution};
use crate::types::{MetricsConfig, RiskLevel, RunwayHealthTier, StartupRecord};
use crate::{MetricsError, MetricsResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Compact startup entry for the navigation selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStartup {
    /// Startup ID.
    pub id: String,
    /// Company name.
    pub name: String,
    /// Stage label.
    pub stage: String,
    /// Monthly revenue.
    pub revenue: Decimal,
}

impl From<&StartupRecord> for BasicStartup {
    fn from(record: &StartupRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            stage: record.stage.clone(),
            revenue: record.revenue,
        }
    }
}

/// An ordered collection of startups with unique IDs.
///
/// Individual records are not validated here: a record with, say, a zero
/// acquisition cost is kept so that batch derivation can report it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    records: Vec<StartupRecord>,
}

impl Roster {
    /// Creates a new roster builder.
    #[must_use]
    pub fn builder() -> super::RosterBuilder {
        super::RosterBuilder::new()
    }

    /// Builds a roster from records, checking ID uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::MissingField`] for a blank ID or
    /// [`MetricsError::DuplicateId`] for a repeated one.
    pub fn from_records(records: Vec<StartupRecord>) -> MetricsResult<Self> {
        let roster = Self { records };
        roster.validate()?;
        Ok(roster)
    }

    pub(crate) fn validate(&self) -> MetricsResult<()> {
        let mut seen = HashSet::with_capacity(self.records.len());
        for record in &self.records {
            if record.id.trim().is_empty() {
                return Err(MetricsError::missing_field("id"));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(MetricsError::duplicate_id(&record.id));
            }
        }
        Ok(())
    }

    /// All records, in roster order.
    #[must_use]
    pub fn records(&self) -> &[StartupRecord] {
        &self.records
    }

    /// Number of startups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the roster has no startups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a startup by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StartupRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Position of a startup in the roster.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Selector entries for every startup, in roster order.
    #[must_use]
    pub fn basic_startups(&self) -> Vec<BasicStartup> {
        self.records.iter().map(BasicStartup::from).collect()
    }

    /// Portfolio summary of the whole roster.
    #[must_use]
    pub fn summarize(&self, config: &MetricsConfig) -> PortfolioSummary {
        PortfolioSummary::calculate(&self.records, config)
    }

    /// Derived views of every startup.
    #[must_use]
    pub fn derive_views(&self, config: &MetricsConfig) -> BatchDerivation {
        BatchDerivation::derive(&self.records, config)
    }

    /// Startups grouped by industry.
    #[must_use]
    pub fn by_industry(&self) -> Distribution<String> {
        bucketing::bucket_by_industry(&self.records)
    }

    /// Startups grouped by risk level.
    #[must_use]
    pub fn by_risk_level(&self) -> Distribution<RiskLevel> {
        bucketing::bucket_by_risk_level(&self.records)
    }

    /// Startups grouped by runway tier.
    #[must_use]
    pub fn by_runway_tier(&self) -> Distribution<RunwayHealthTier> {
        bucketing::bucket_by_runway_tier(&self.records)
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let records = Vec::<StartupRecord>::deserialize(deserializer)?;
        Roster::from_records(records).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StartupRecord;
    type IntoIter = std::slice::Iter<'a, StartupRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
