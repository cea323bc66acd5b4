// State management module
// Holds the activity roster and the shared application state

/// Activity record type
pub mod activity;
/// Shared application state
pub mod app_state;
/// Roster container and its signup / unregister operations
pub mod roster;
mod seed;

pub use activity::Activity;
pub use app_state::{AppState, SharedState};
pub use roster::{ChangeKind, Roster, RosterChange, RosterError};
