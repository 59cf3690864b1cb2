//! Closed classifications used by derived startup views.
//!
//! Each indicator maps onto one of three [`StyleTone`]s so a display layer
//! can style a card without any string-keyed lookup tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runway below this many whole months is critical.
pub const CRITICAL_RUNWAY_MONTHS: u32 = 6;

/// Runway below this many whole months (and at least critical) is a warning.
pub const WARNING_RUNWAY_MONTHS: u32 = 12;

/// Progress points per month of runway; 20 months fills the bar.
pub const PROGRESS_PER_MONTH: u32 = 5;

/// Upper bound of the runway progress bar.
pub const PROGRESS_MAX: u32 = 100;

// =============================================================================
// STYLE TONE
// =============================================================================

/// The three visual tones a dashboard card can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTone {
    /// Good news.
    Accent,
    /// Needs attention.
    Warning,
    /// Act now.
    Error,
}

impl StyleTone {
    /// Returns the text color class for this tone.
    #[must_use]
    pub fn text_class(&self) -> &'static str {
        match self {
            Self::Accent => "text-brand-accent",
            Self::Warning => "text-brand-warning",
            Self::Error => "text-brand-error",
        }
    }

    /// Returns the badge background and border classes for this tone.
    #[must_use]
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Accent => "bg-brand-accent/10 border-brand-accent/20",
            Self::Warning => "bg-brand-warning/10 border-brand-warning/20",
            Self::Error => "bg-brand-error/10 border-brand-error/20",
        }
    }
}

// =============================================================================
// RISK LEVEL
// =============================================================================

/// Analyst-assigned risk level of a startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
}

impl RiskLevel {
    /// All risk levels, lowest first.
    pub const ALL: [RiskLevel; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the style tone for this risk level.
    #[must_use]
    pub fn tone(&self) -> StyleTone {
        match self {
            Self::Low => StyleTone::Accent,
            Self::Medium => StyleTone::Warning,
            Self::High => StyleTone::Error,
        }
    }

    /// Returns the lowercase code used in serialized records.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// =============================================================================
// RUNWAY HEALTH
// =============================================================================

/// Health tier of a startup's cash runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunwayHealthTier {
    /// Fewer than 6 whole months left.
    Critical,
    /// 6 to 11 whole months left.
    Warning,
    /// 12 or more whole months left.
    Healthy,
}

impl RunwayHealthTier {
    /// All tiers, most urgent first.
    pub const ALL: [RunwayHealthTier; 3] = [Self::Critical, Self::Warning, Self::Healthy];

    /// Classify a whole number of runway months.
    #[must_use]
    pub fn from_months(months: u32) -> Self {
        if months < CRITICAL_RUNWAY_MONTHS {
            Self::Critical
        } else if months < WARNING_RUNWAY_MONTHS {
            Self::Warning
        } else {
            Self::Healthy
        }
    }

    /// Classify a fractional runway in months.
    ///
    /// Only whole months count, so 5.9 months is still critical.
    #[must_use]
    pub fn from_runway(runway: f64) -> Self {
        Self::from_months(whole_months(runway))
    }

    /// Returns the display label for this tier.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Healthy => "Healthy",
        }
    }

    /// Returns the style tone for this tier.
    #[must_use]
    pub fn tone(&self) -> StyleTone {
        match self {
            Self::Critical => StyleTone::Error,
            Self::Warning => StyleTone::Warning,
            Self::Healthy => StyleTone::Accent,
        }
    }
}

impl fmt::Display for RunwayHealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whole months of runway (floor). Negative and NaN inputs give 0.
#[must_use]
pub fn whole_months(runway: f64) -> u32 {
    // `as` saturates: NaN and negatives become 0, huge values become u32::MAX.
    runway.floor() as u32
}

/// Runway progress bar value: 5 points per whole month, capped at 100.
#[must_use]
pub fn runway_progress(months: u32) -> u32 {
    months.saturating_mul(PROGRESS_PER_MONTH).min(PROGRESS_MAX)
}

// =============================================================================
// GROWTH DIRECTION
// =============================================================================

/// Sign of a startup's growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthDirection {
    /// Growth rate strictly above zero.
    Positive,
    /// Zero or negative growth.
    NegativeOrFlat,
}

impl GrowthDirection {
    /// Classify a growth rate. Zero counts as flat.
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        if rate > 0.0 {
            Self::Positive
        } else {
            Self::NegativeOrFlat
        }
    }

    /// Returns the style tone for this direction.
    #[must_use]
    pub fn tone(&self) -> StyleTone {
        match self {
            Self::Positive => StyleTone::Accent,
            Self::NegativeOrFlat => StyleTone::Error,
        }
    }

    /// Formats a growth rate with an explicit `+` for positive values.
    ///
    /// ```
    /// use studio_metrics::types::GrowthDirection;
    ///
    /// assert_eq!(GrowthDirection::signed_label(12.5), "+12.5%");
    /// assert_eq!(GrowthDirection::signed_label(-3.0), "-3%");
    /// assert_eq!(GrowthDirection::signed_label(0.0), "0%");
    /// ```
    #[must_use]
    pub fn signed_label(rate: f64) -> String {
        match Self::from_rate(rate) {
            Self::Positive => format!("+{rate}%"),
            // -0.0 prints as "-0"
            Self::NegativeOrFlat if rate == 0.0 => "0%".to_string(),
            Self::NegativeOrFlat => format!("{rate}%"),
        }
    }
}
