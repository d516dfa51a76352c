// Pure decision function for signups.
//
// Rules, checked in order: the student must not already be enrolled, and the
// activity must have a free spot. Activity lookup happens before this is
// called. Never performs input or output.

use crate::modules::activities::core::{
    activity::Activity,
    decider::{decision::DecideError, sign_up::command::SignUpForActivity},
    events::{ParticipantSignedUp, RosterEvent},
};

pub fn decide_sign_up(
    activity: &Activity,
    command: SignUpForActivity,
) -> Result<RosterEvent, DecideError> {
    if activity.is_enrolled(&command.email) {
        return Err(DecideError::AlreadyRegistered);
    }
    if activity.is_full() {
        return Err(DecideError::CapacityExceeded);
    }
    Ok(RosterEvent::ParticipantSignedUp(ParticipantSignedUp {
        activity_name: command.activity_name,
        email: command.email,
        occurred_at: command.requested_at,
    }))
}
