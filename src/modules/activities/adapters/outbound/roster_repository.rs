// Port for the roster store. Use case handlers depend on this trait; the
// in-memory adapter implements it.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decider::sign_up::command::SignUpForActivity;
use crate::modules::activities::core::decider::unregister::command::UnregisterFromActivity;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::core::roster::RosterError;

#[derive(Debug, Error)]
pub enum RosterRepositoryError {
    #[error(transparent)]
    Rejected(#[from] RosterError),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RosterRepository: Send + Sync {
    async fn list_activities(&self) -> Result<BTreeMap<String, Activity>, RosterRepositoryError>;

    async fn find_activity(
        &self,
        activity_name: &str,
    ) -> Result<Option<Activity>, RosterRepositoryError>;

    async fn sign_up(
        &self,
        command: SignUpForActivity,
    ) -> Result<RosterEvent, RosterRepositoryError>;

    async fn unregister(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<RosterEvent, RosterRepositoryError>;
}
