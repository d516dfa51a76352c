// Response shapes shared by the HTTP inbound adapters.
//
// Successes carry `{"message": ..}`, failures carry `{"detail": ..}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::core::roster::RosterErrorKind;
use crate::modules::activities::use_cases::errors::ApplicationError;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn missing_email() -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Missing required query parameter: email",
    )
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Roster(err) => {
                let status = match err.kind() {
                    RosterErrorKind::NotFound => StatusCode::NOT_FOUND,
                    RosterErrorKind::AlreadyRegistered
                    | RosterErrorKind::NotRegistered
                    | RosterErrorKind::CapacityExceeded => StatusCode::BAD_REQUEST,
                };
                error_response(status, err.to_string())
            }
            ApplicationError::Unexpected(message) => {
                tracing::error!(error = %message, "roster backend failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
