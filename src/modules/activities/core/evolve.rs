use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::RosterEvent;

pub fn evolve(activity: &mut Activity, event: &RosterEvent) {
    match event {
        RosterEvent::ParticipantSignedUp(e) => {
            if !activity.is_enrolled(&e.email) {
                activity.participants.push(e.email.clone());
            }
        }
        RosterEvent::ParticipantUnregistered(e) => {
            activity.participants.retain(|participant| participant != &e.email);
        }
    }
}
