use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantSignedUp {
    pub activity_name: String,
    pub email: String,
    pub occurred_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantUnregistered {
    pub activity_name: String,
    pub email: String,
    pub occurred_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RosterEvent {
    ParticipantSignedUp(ParticipantSignedUp),
    ParticipantUnregistered(ParticipantUnregistered),
}

impl RosterEvent {
    pub fn activity_name(&self) -> &str {
        match self {
            RosterEvent::ParticipantSignedUp(e) => &e.activity_name,
            RosterEvent::ParticipantUnregistered(e) => &e.activity_name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            RosterEvent::ParticipantSignedUp(e) => &e.email,
            RosterEvent::ParticipantUnregistered(e) => &e.email,
        }
    }

    /// Confirmation shown to the student once the event has been applied.
    pub fn message(&self) -> String {
        match self {
            RosterEvent::ParticipantSignedUp(e) => {
                format!("Signed up {} for {}", e.email, e.activity_name)
            }
            RosterEvent::ParticipantUnregistered(e) => {
                format!("Unregistered {} from {}", e.email, e.activity_name)
            }
        }
    }
}
