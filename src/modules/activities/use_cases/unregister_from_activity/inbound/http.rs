use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};

use crate::modules::activities::adapters::inbound::http_responses::{
    MessageResponse, ParticipantQuery, missing_email,
};
use crate::modules::activities::core::decider::unregister::command::UnregisterFromActivity;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return missing_email();
    };

    let command = UnregisterFromActivity::new(activity_name, query.email);
    match state.unregister_handler.handle(command).await {
        Ok(event) => Json(MessageResponse {
            message: event.message(),
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}
