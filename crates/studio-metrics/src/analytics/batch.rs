//! Batch derivation over many startups.
//!
//! Each record is derived independently: a record that fails validation is
//! reported alongside the successes instead of aborting the batch.

use super::parallel::maybe_parallel_map;
use super::view::DerivedStartupView;
use crate::types::{MetricsConfig, StartupRecord};
use crate::MetricsError;
use serde::Serialize;
use tracing::warn;

/// Outcome of deriving one record in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordOutcome {
    /// ID of the source record.
    pub id: String,

    /// The derived view, or why it could not be derived.
    #[serde(with = "outcome_serde")]
    pub result: Result<DerivedStartupView, MetricsError>,
}

impl RecordOutcome {
    /// Returns the view if derivation succeeded.
    #[must_use]
    pub fn view(&self) -> Option<&DerivedStartupView> {
        self.result.as_ref().ok()
    }

    /// Returns the error if derivation failed.
    #[must_use]
    pub fn error(&self) -> Option<&MetricsError> {
        self.result.as_ref().err()
    }
}

/// Per-record outcomes of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchDerivation {
    /// One outcome per input record.
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchDerivation {
    /// Derives every record in `records`.
    #[must_use]
    pub fn derive(records: &[StartupRecord], config: &MetricsConfig) -> Self {
        let outcomes = maybe_parallel_map(records, config, |r| RecordOutcome {
            id: r.id.clone(),
            result: DerivedStartupView::derive(r),
        });

        for outcome in &outcomes {
            if let Err(e) = &outcome.result {
                warn!(id = %outcome.id, error = %e, "metrics unavailable");
            }
        }

        Self { outcomes }
    }

    /// Number of records in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if the batch had no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Successfully derived views, in input order.
    pub fn successes(&self) -> impl Iterator<Item = &DerivedStartupView> {
        self.outcomes.iter().filter_map(RecordOutcome::view)
    }

    /// Failed records as `(id, error)`, in input order.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &MetricsError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error().map(|e| (o.id.as_str(), e)))
    }

    /// Number of failed records.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// True when every record derived successfully.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Looks up the outcome for a record ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RecordOutcome> {
        self.outcomes.iter().find(|o| o.id == id)
    }
}

/// Convenience function to derive views for many records.
///
/// See [`BatchDerivation::derive`].
#[must_use]
pub fn derive_views(records: &[StartupRecord], config: &MetricsConfig) -> BatchDerivation {
    BatchDerivation::derive(records, config)
}

// Serializes an outcome as `{"view": ...}` or `{"error": "..."}`.
mod outcome_serde {
    use super::{DerivedStartupView, MetricsError};
    use serde::ser::SerializeMap;
    use serde::Serializer;

    pub fn serialize<S>(
        result: &Result<DerivedStartupView, MetricsError>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match result {
            Ok(view) => map.serialize_entry("view", view)?,
            Err(e) => map.serialize_entry("error", &e.to_string())?,
        }
        map.end()
    }
}
