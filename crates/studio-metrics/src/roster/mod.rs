//! Roster of tracked startups and the selection context.

mod builder;
#[allow(clippy::module_inception)]
mod roster;
mod selection;

pub use builder::RosterBuilder;
pub use roster::{BasicStartup, Roster};
pub use selection::StartupSelection;
