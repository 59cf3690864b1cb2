//! Per-startup derived indicators.

use crate::types::{
    runway_progress, whole_months, GrowthDirection, RunwayHealthTier, StartupRecord, StyleTone,
};
use crate::{MetricsError, MetricsResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places of the displayed LTV/CAC ratio.
pub const RATIO_DISPLAY_DP: u32 = 1;

/// Indicators derived from a single startup record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStartupView {
    /// ID of the source record.
    pub id: String,

    /// Whole months of runway (floor of the fractional runway).
    pub runway_months: u32,

    /// Health tier of the runway.
    pub runway_health_tier: RunwayHealthTier,

    /// Runway progress bar value, 0-100.
    pub runway_progress_value: u32,

    /// Unrounded lifetime value / acquisition cost.
    pub ltv_to_cac_ratio: f64,

    /// The ratio rounded to one decimal, half away from zero.
    pub ltv_to_cac_display: Decimal,

    /// Sign of the growth rate.
    pub growth_direction: GrowthDirection,

    /// Style bucket for the record's risk level.
    pub risk_style_bucket: StyleTone,

    /// First recommended next step, if any.
    pub headline_step: Option<String>,
}

impl DerivedStartupView {
    /// Derives the view for one record.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::InvalidInput`] if the acquisition cost is not
    /// positive, or the runway is negative or not finite.
    pub fn derive(record: &StartupRecord) -> MetricsResult<Self> {
        if record.customer_acquisition_cost <= Decimal::ZERO {
            return Err(MetricsError::invalid_input(
                &record.id,
                "customer_acquisition_cost",
                "must be positive to compute LTV/CAC",
            ));
        }
        if !record.runway.is_finite() || record.runway < 0.0 {
            return Err(MetricsError::invalid_input(
                &record.id,
                "runway",
                "must be a non-negative number of months",
            ));
        }

        let ratio = record
            .lifetime_value
            .checked_div(record.customer_acquisition_cost)
            .ok_or_else(|| {
                MetricsError::invalid_input(&record.id, "lifetime_value", "LTV/CAC overflows")
            })?;
        let ltv_to_cac_ratio = ratio.to_f64().ok_or_else(|| {
            MetricsError::invalid_input(&record.id, "lifetime_value", "LTV/CAC not representable")
        })?;

        let runway_months = whole_months(record.runway);

        Ok(Self {
            id: record.id.clone(),
            runway_months,
            runway_health_tier: RunwayHealthTier::from_months(runway_months),
            runway_progress_value: runway_progress(runway_months),
            ltv_to_cac_ratio,
            ltv_to_cac_display: ratio
                .round_dp_with_strategy(RATIO_DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero),
            growth_direction: GrowthDirection::from_rate(record.growth_rate),
            risk_style_bucket: record.risk_level.tone(),
            headline_step: record.headline_step().map(str::to_string),
        })
    }

    /// The displayed ratio, e.g. `"12.0x"`.
    #[must_use]
    pub fn ltv_to_cac_label(&self) -> String {
        format!("{:.1}x", self.ltv_to_cac_display)
    }

    /// True when the runway tier is critical.
    #[must_use]
    pub fn is_runway_critical(&self) -> bool {
        self.runway_health_tier == RunwayHealthTier::Critical
    }
}

/// Convenience function to derive the view for one record.
///
/// See [`DerivedStartupView::derive`].
///
/// # Errors
///
/// Returns [`MetricsError::InvalidInput`] for a non-positive acquisition cost
/// or an invalid runway.
pub fn derive_view(record: &StartupRecord) -> MetricsResult<DerivedStartupView> {
    DerivedStartupView::derive(record)
}
