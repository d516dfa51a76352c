use serde::{Deserialize, Serialize};

/// An extracurricular activity and the students enrolled in it.
///
/// `participants` keeps signup order. Uniqueness and the capacity bound are
/// enforced by the deciders, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|participant| participant == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}
