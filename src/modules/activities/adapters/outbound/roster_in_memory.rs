// In memory implementation of the RosterRepository port.
//
// Purpose
// - Hold the process-lifetime roster without a database.
//
// Responsibilities
// - Guard the roster with a single lock; each mutation runs decide and evolve
//   under one write guard.
// - Simulate an unavailable backend for handler and inbound tests.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::modules::activities::adapters::outbound::roster_repository::{
    RosterRepository, RosterRepositoryError,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decider::sign_up::command::SignUpForActivity;
use crate::modules::activities::core::decider::unregister::command::UnregisterFromActivity;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::core::roster::ActivityRoster;

#[derive(Default)]
pub struct InMemoryRoster {
    roster: RwLock<ActivityRoster>,
    is_offline: bool,
}

impl InMemoryRoster {
    pub fn new(roster: ActivityRoster) -> Self {
        Self {
            roster: RwLock::new(roster),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RosterRepositoryError> {
        if self.is_offline {
            return Err(RosterRepositoryError::Backend("Roster offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RosterRepository for InMemoryRoster {
    async fn list_activities(&self) -> Result<BTreeMap<String, Activity>, RosterRepositoryError> {
        self.ensure_online()?;
        Ok(self.roster.read().await.list_activities().clone())
    }

    async fn find_activity(
        &self,
        activity_name: &str,
    ) -> Result<Option<Activity>, RosterRepositoryError> {
        self.ensure_online()?;
        Ok(self.roster.read().await.activity(activity_name).cloned())
    }

    async fn sign_up(
        &self,
        command: SignUpForActivity,
    ) -> Result<RosterEvent, RosterRepositoryError> {
        self.ensure_online()?;
        Ok(self.roster.write().await.signup(command)?)
    }

    async fn unregister(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<RosterEvent, RosterRepositoryError> {
        self.ensure_online()?;
        Ok(self.roster.write().await.unregister(command)?)
    }
}
