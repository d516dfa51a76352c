use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.list_handler.handle().await {
        Ok(activities) => Json(activities).into_response(),
        Err(err) => err.into_response(),
    }
}
