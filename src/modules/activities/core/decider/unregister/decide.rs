use crate::modules::activities::core::{
    activity::Activity,
    decider::{decision::DecideError, unregister::command::UnregisterFromActivity},
    events::{ParticipantUnregistered, RosterEvent},
};

/// Only an enrolled student can be unregistered.
pub fn decide_unregister(
    activity: &Activity,
    command: UnregisterFromActivity,
) -> Result<RosterEvent, DecideError> {
    if !activity.is_enrolled(&command.email) {
        return Err(DecideError::NotRegistered);
    }
    Ok(RosterEvent::ParticipantUnregistered(ParticipantUnregistered {
        activity_name: command.activity_name,
        email: command.email,
        occurred_at: command.requested_at,
    }))
}
