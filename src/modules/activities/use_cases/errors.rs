use thiserror::Error;

use crate::modules::activities::adapters::outbound::roster_repository::RosterRepositoryError;
use crate::modules::activities::core::roster::RosterError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<RosterRepositoryError> for ApplicationError {
    fn from(err: RosterRepositoryError) -> Self {
        match err {
            RosterRepositoryError::Rejected(err) => ApplicationError::Roster(err),
            RosterRepositoryError::Backend(message) => ApplicationError::Unexpected(message),
        }
    }
}
