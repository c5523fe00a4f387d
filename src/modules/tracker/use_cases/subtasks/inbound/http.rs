use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::tracker::core::entities::SubtaskPatch;
use crate::modules::tracker::use_cases::subtasks::handler::NewSubtask;
use crate::shell::http::status_for;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    match state.subtasks.list(today).await {
        Ok(views) => Json(views).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn list_by_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<Uuid>,
) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    match state.subtasks.list_by_activity(activity_id, today).await {
        Ok(views) => Json(views).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewSubtask>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.subtasks.create(input).await {
        Ok(subtask) => (StatusCode::CREATED, Json(subtask)).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<SubtaskPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.subtasks.update(id, patch).await {
        Ok(subtask) => Json(subtask).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.subtasks.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}
