//! Startup record representation.

use super::RiskLevel;
use crate::{MetricsError, MetricsResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tracked company as supplied by the data source.
///
/// Money fields are monthly amounts. Field names serialize in the upstream
/// camelCase shape; the short upstream names (`cac`, `ltv`, `users`,
/// `churn`) are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupRecord {
    /// Unique identifier within a roster.
    pub id: String,

    /// Company name.
    pub name: String,

    /// Industry label (free text, compared case-sensitively).
    pub industry: String,

    /// Stage label such as "MVP" or "Scaling".
    pub stage: String,

    /// Monthly revenue.
    pub revenue: Decimal,

    /// Monthly net cash outflow.
    pub burn: Decimal,

    /// Months of cash left, fractional.
    pub runway: f64,

    /// Average cost to acquire one customer.
    #[serde(alias = "cac")]
    pub customer_acquisition_cost: Decimal,

    /// Average revenue over one customer's lifetime.
    #[serde(alias = "ltv")]
    pub lifetime_value: Decimal,

    /// Number of users.
    #[serde(alias = "users")]
    pub user_count: u64,

    /// Customer churn, percent (0-100).
    #[serde(alias = "churn")]
    pub churn_rate: f64,

    /// Growth rate, signed percent.
    pub growth_rate: f64,

    /// Analyst-assigned risk level.
    pub risk_level: RiskLevel,

    /// Recommended next steps, most important first.
    #[serde(default)]
    pub next_steps: Vec<String>,
}

impl StartupRecord {
    /// Creates a new record builder.
    #[must_use]
    pub fn builder() -> StartupRecordBuilder {
        StartupRecordBuilder::new()
    }

    /// Returns the most important next step, if any.
    #[must_use]
    pub fn headline_step(&self) -> Option<&str> {
        self.next_steps.first().map(String::as_str)
    }

    /// Checks every field against the data model's invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> MetricsResult<()> {
        let invalid = |field: &str, reason: &str| {
            Err(MetricsError::invalid_input(&self.id, field, reason))
        };

        if self.id.trim().is_empty() {
            return Err(MetricsError::missing_field("id"));
        }
        if self.revenue < Decimal::ZERO {
            return invalid("revenue", "cannot be negative");
        }
        if self.burn < Decimal::ZERO {
            return invalid("burn", "cannot be negative");
        }
        if !self.runway.is_finite() || self.runway < 0.0 {
            return invalid("runway", "must be a non-negative number of months");
        }
        if self.customer_acquisition_cost <= Decimal::ZERO {
            return invalid("customer_acquisition_cost", "must be positive");
        }
        if self.lifetime_value <= Decimal::ZERO {
            return invalid("lifetime_value", "must be positive");
        }
        if !(0.0..=100.0).contains(&self.churn_rate) {
            return invalid("churn_rate", "must be between 0 and 100");
        }
        if !self.growth_rate.is_finite() {
            return invalid("growth_rate", "must be finite");
        }
        Ok(())
    }
}

/// Builder for [`StartupRecord`].
#[derive(Debug, Clone, Default)]
pub struct StartupRecordBuilder {
    id: Option<String>,
    name: Option<String>,
    industry: String,
    stage: String,
    revenue: Decimal,
    burn: Decimal,
    runway: f64,
    customer_acquisition_cost: Option<Decimal>,
    lifetime_value: Option<Decimal>,
    user_count: u64,
    churn_rate: f64,
    growth_rate: f64,
    risk_level: Option<RiskLevel>,
    next_steps: Vec<String>,
}

impl StartupRecordBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the industry label.
    #[must_use]
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    /// Sets the stage label.
    #[must_use]
    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    /// Sets monthly revenue.
    #[must_use]
    pub fn revenue(mut self, revenue: Decimal) -> Self {
        self.revenue = revenue;
        self
    }

    /// Sets monthly burn.
    #[must_use]
    pub fn burn(mut self, burn: Decimal) -> Self {
        self.burn = burn;
        self
    }

    /// Sets runway in months.
    #[must_use]
    pub fn runway(mut self, months: f64) -> Self {
        self.runway = months;
        self
    }

    /// Sets the customer acquisition cost.
    #[must_use]
    pub fn customer_acquisition_cost(mut self, cac: Decimal) -> Self {
        self.customer_acquisition_cost = Some(cac);
        self
    }

    /// Sets the customer lifetime value.
    #[must_use]
    pub fn lifetime_value(mut self, ltv: Decimal) -> Self {
        self.lifetime_value = Some(ltv);
        self
    }

    /// Sets the user count.
    #[must_use]
    pub fn user_count(mut self, users: u64) -> Self {
        self.user_count = users;
        self
    }

    /// Sets churn percent.
    #[must_use]
    pub fn churn_rate(mut self, churn: f64) -> Self {
        self.churn_rate = churn;
        self
    }

    /// Sets growth percent.
    #[must_use]
    pub fn growth_rate(mut self, growth: f64) -> Self {
        self.growth_rate = growth;
        self
    }

    /// Sets the risk level.
    #[must_use]
    pub fn risk_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = Some(level);
        self
    }

    /// Appends a recommended next step.
    #[must_use]
    pub fn next_step(mut self, step: impl Into<String>) -> Self {
        self.next_steps.push(step.into());
        self
    }

    /// Builds the record.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or any field fails
    /// [`StartupRecord::validate`].
    pub fn build(self) -> MetricsResult<StartupRecord> {
        let id = self.id.ok_or_else(|| MetricsError::missing_field("id"))?;
        let name = self.name.ok_or_else(|| MetricsError::missing_field("name"))?;
        let customer_acquisition_cost = self
            .customer_acquisition_cost
            .ok_or_else(|| MetricsError::missing_field("customer_acquisition_cost"))?;
        let lifetime_value = self
            .lifetime_value
            .ok_or_else(|| MetricsError::missing_field("lifetime_value"))?;
        let risk_level = self
            .risk_level
            .ok_or_else(|| MetricsError::missing_field("risk_level"))?;

        let record = StartupRecord {
            id,
            name,
            industry: self.industry,
            stage: self.stage,
            revenue: self.revenue,
            burn: self.burn,
            runway: self.runway,
            customer_acquisition_cost,
            lifetime_value,
            user_count: self.user_count,
            churn_rate: self.churn_rate,
            growth_rate: self.growth_rate,
            risk_level,
            next_steps: self.next_steps,
        };

        record.validate()?;
        Ok(record)
    }
}
