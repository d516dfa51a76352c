use async_graphql::{Error, ErrorExtensions};

use crate::modules::activities::use_cases::errors::ApplicationError;

/// Carries the HTTP `detail` text as the message and the roster error kind as
/// the `code` extension.
impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> Error {
        let (message, code) = match self {
            ApplicationError::Roster(err) => (err.to_string(), err.kind().code()),
            ApplicationError::Unexpected(_) => ("Internal server error".to_string(), "INTERNAL"),
        };
        Error::new(message).extend_with(|_, extensions| extensions.set("code", code))
    }
}
