use std::collections::BTreeMap;
use std::sync::Arc;

use crate::modules::activities::adapters::outbound::roster_repository::RosterRepository;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::errors::ApplicationError;

pub struct ListActivitiesHandler<TRoster>
where
    TRoster: RosterRepository + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> ListActivitiesHandler<TRoster>
where
    TRoster: RosterRepository + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(&self) -> Result<BTreeMap<String, Activity>, ApplicationError> {
        Ok(self.roster.list_activities().await?)
    }

    pub async fn find(&self, activity_name: &str) -> Result<Option<Activity>, ApplicationError> {
        Ok(self.roster.find_activity(activity_name).await?)
    }
}
