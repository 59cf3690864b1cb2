//! Caller-owned "currently selected startup" context.

use super::{BasicStartup, Roster};
use crate::analytics::DerivedStartupView;
use crate::types::StartupRecord;
use crate::{MetricsError, MetricsResult};

/// The startup a dashboard is currently focused on.
///
/// Holds a borrow of the roster plus an index, so the selection can never
/// point at a record that is not in the roster.
#[derive(Debug, Clone, Copy)]
pub struct StartupSelection<'a> {
    roster: &'a Roster,
    index: usize,
}

impl<'a> StartupSelection<'a> {
    /// Selects the first startup in the roster.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::EmptyRoster`] if there is nothing to select.
    pub fn first(roster: &'a Roster) -> MetricsResult<Self> {
        if roster.is_empty() {
            return Err(MetricsError::EmptyRoster);
        }
        Ok(Self { roster, index: 0 })
    }

    /// Selects the startup with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::UnknownStartup`] if no startup has that ID.
    pub fn with_id(roster: &'a Roster, id: &str) -> MetricsResult<Self> {
        let index = roster
            .position(id)
            .ok_or_else(|| MetricsError::unknown_startup(id))?;
        Ok(Self { roster, index })
    }

    /// Switches the selection to another startup.
    ///
    /// On an unknown ID the current selection is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::UnknownStartup`] if no startup has that ID.
    pub fn select(&mut self, id: &str) -> MetricsResult<&'a StartupRecord> {
        let index = self
            .roster
            .position(id)
            .ok_or_else(|| MetricsError::unknown_startup(id))?;
        self.index = index;
        Ok(self.current())
    }

    /// The selected record.
    #[must_use]
    pub fn current(&self) -> &'a StartupRecord {
        &self.roster.records()[self.index]
    }

    /// Selector entry for the selected record.
    #[must_use]
    pub fn current_basic(&self) -> BasicStartup {
        BasicStartup::from(self.current())
    }

    /// True if `id` is the selected startup.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.current().id == id
    }

    /// Derived view of the selected startup.
    ///
    /// # Errors
    ///
    /// Propagates [`DerivedStartupView::derive`] failures.
    pub fn view(&self) -> MetricsResult<DerivedStartupView> {
        DerivedStartupView::derive(self.current())
    }
}
