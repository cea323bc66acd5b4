// Activity record
// One extracurricular offering and its signup list

use serde::{Deserialize, Serialize};

/// A single extracurricular activity
///
/// The activity name is not stored here; it is the key under which the
/// activity lives in the [`Roster`](super::Roster).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Free-text description shown to students
    pub description: String,
    /// Human-readable meeting days and times
    pub schedule: String,
    /// Advisory capacity; signups are not checked against it
    pub max_participants: u32,
    /// Participant emails in signup order, without duplicates
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with the given participants
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Whether the given email is on the participant list
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of open places left, saturating at zero
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}
