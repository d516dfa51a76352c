use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::activities::adapters::outbound::roster_repository::RosterRepository;
use crate::modules::activities::core::decider::unregister::command::UnregisterFromActivity;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::errors::ApplicationError;

pub struct UnregisterFromActivityHandler<TRoster>
where
    TRoster: RosterRepository + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> UnregisterFromActivityHandler<TRoster>
where
    TRoster: RosterRepository + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<RosterEvent, ApplicationError> {
        let activity_name = command.activity_name.clone();
        let email = command.email.clone();
        self.roster
            .unregister(command)
            .await
            .map(|event| {
                info!(activity = %activity_name, %email, "student unregistered");
                event
            })
            .map_err(|err| {
                let err = ApplicationError::from(err);
                warn!(activity = %activity_name, %email, error = %err, "unregister rejected");
                err
            })
    }
}
