// Signup command handler.
//
// Responsibilities
// - Hand the command to the roster store, which decides and applies it.
// - Log the outcome with the activity and student attached.

use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::activities::adapters::outbound::roster_repository::RosterRepository;
use crate::modules::activities::core::decider::sign_up::command::SignUpForActivity;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::errors::ApplicationError;

pub struct SignUpForActivityHandler<TRoster>
where
    TRoster: RosterRepository + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> SignUpForActivityHandler<TRoster>
where
    TRoster: RosterRepository + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<RosterEvent, ApplicationError> {
        let activity_name = command.activity_name.clone();
        let email = command.email.clone();
        match self.roster.sign_up(command).await {
            Ok(event) => {
                info!(activity = %activity_name, %email, "student signed up");
                Ok(event)
            }
            Err(err) => {
                let err = ApplicationError::from(err);
                warn!(activity = %activity_name, %email, error = %err, "signup rejected");
                Err(err)
            }
        }
    }
}
