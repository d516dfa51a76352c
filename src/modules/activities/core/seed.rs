// Seed data for the roster, loaded once at startup.
//
// The embedded document is the school's default activity list. Operators can
// replace it with a JSON file of the same shape: an object keyed by activity
// name whose values are `Activity` records.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::roster::ActivityRoster;

const DEFAULT_SEED: &str = include_str!("seed/activities.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("activity {activity_name:?} lists {email:?} more than once")]
    DuplicateParticipant { activity_name: String, email: String },

    #[error(
        "activity {activity_name:?} starts with {enrolled} participants but only has room for {max_participants}"
    )]
    OverCapacity {
        activity_name: String,
        enrolled: usize,
        max_participants: u32,
    },
}

pub fn default_roster() -> Result<ActivityRoster, SeedError> {
    parse_roster(DEFAULT_SEED)
}

pub fn load_roster(path: &Path) -> Result<ActivityRoster, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_roster(&json)
}

pub fn parse_roster(json: &str) -> Result<ActivityRoster, SeedError> {
    let activities: BTreeMap<String, Activity> = serde_json::from_str(json)?;
    for (activity_name, activity) in &activities {
        validate(activity_name, activity)?;
    }
    Ok(ActivityRoster::new(activities))
}

fn validate(activity_name: &str, activity: &Activity) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for email in &activity.participants {
        if !seen.insert(email.as_str()) {
            return Err(SeedError::DuplicateParticipant {
                activity_name: activity_name.to_string(),
                email: email.clone(),
            });
        }
    }
    if activity.participants.len() > activity.max_participants as usize {
        return Err(SeedError::OverCapacity {
            activity_name: activity_name.to_string(),
            enrolled: activity.participants.len(),
            max_participants: activity.max_participants,
        });
    }
    Ok(())
}
