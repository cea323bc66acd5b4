// Application state management
// Contains the activity roster shared by every request handler

use super::Roster;
use std::sync::Arc;
use tokio::sync::RwLock;

/// State handle passed to handlers
///
/// Every roster mutation takes the write guard, so signups and
/// unregistrations are serialized across all activities.
pub type SharedState = Arc<RwLock<AppState>>;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// All activities and their participants
    pub roster: Roster,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            roster: Roster::seeded(),
        }
    }
}

impl AppState {
    /// Create application state with the seeded roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state around an existing roster
    pub fn with_roster(roster: Roster) -> Self {
        Self { roster }
    }

    /// Wrap into the shared handle used by the router
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Put the roster back to its startup contents
    pub fn reset(&mut self) {
        self.roster.reset();
    }
}
