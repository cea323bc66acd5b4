// Activity roster
// Owns every activity and applies signup / unregister changes

use super::{seed, Activity};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Reasons a roster change can be refused
///
/// A refused change never touches the roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No activity is registered under the given name
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    /// The email is already on the activity's participant list
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp {
        /// Activity the signup targeted
        activity: String,
        /// Email that was already present
        email: String,
    },

    /// The email is not on the activity's participant list
    #[error("{email} is not registered for {activity}")]
    NotRegistered {
        /// Activity the unregister targeted
        activity: String,
        /// Email that was absent
        email: String,
    },
}

/// Direction of an applied roster change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Email appended to the participant list
    Signup,
    /// Email removed from the participant list
    Unregister,
}

/// Confirmation of a successful roster change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterChange {
    /// What happened
    pub kind: ChangeKind,
    /// Activity that changed
    pub activity: String,
    /// Email that was added or removed
    pub email: String,
}

impl RosterChange {
    /// Human-readable confirmation returned to clients
    pub fn message(&self) -> String {
        match self.kind {
            ChangeKind::Signup => format!("Signed up {} for {}", self.email, self.activity),
            ChangeKind::Unregister => {
                format!("Unregistered {} from {}", self.email, self.activity)
            }
        }
    }
}

/// Mapping from activity name to activity, in display order
///
/// Names are matched exactly and case-sensitively. Activities are never
/// added or removed after construction; only participant lists change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    activities: IndexMap<String, Activity>,
}

impl Roster {
    /// Create a roster from explicit activities
    pub fn new<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>,
    {
        Self {
            activities: activities
                .into_iter()
                .map(|(name, activity)| (name.into(), activity))
                .collect(),
        }
    }

    /// Create the roster the school starts every term with
    pub fn seeded() -> Self {
        Self::new(seed::activities())
    }

    /// Restore the startup contents, discarding every change
    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    /// All activities, keyed by name
    pub fn list(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    /// Look up a single activity by exact name
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Number of activities
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the roster holds no activities
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Sign `email` up for `activity`, appending it to the participant list
    ///
    /// The email is stored verbatim; no format checks are applied.
    /// Capacity is advisory and not enforced here.
    pub fn enroll(&mut self, activity: &str, email: &str) -> Result<RosterChange, RosterError> {
        let entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| RosterError::ActivityNotFound(activity.to_string()))?;

        if entry.has_participant(email) {
            return Err(RosterError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        entry.participants.push(email.to_string());
        tracing::info!(activity = %activity, email = %email, "Participant signed up");

        Ok(RosterChange {
            kind: ChangeKind::Signup,
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    /// Remove `email` from `activity`, keeping the remaining order
    pub fn withdraw(&mut self, activity: &str, email: &str) -> Result<RosterChange, RosterError> {
        let entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| RosterError::ActivityNotFound(activity.to_string()))?;

        let position = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RosterError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;

        entry.participants.remove(position);
        tracing::info!(activity = %activity, email = %email, "Participant unregistered");

        Ok(RosterChange {
            kind: ChangeKind::Unregister,
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}
