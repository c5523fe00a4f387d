use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::tracker::core::entities::ActivityPatch;
use crate::modules::tracker::use_cases::activities::handler::NewActivity;
use crate::shell::http::status_for;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    match state.activities.list(today).await {
        Ok(views) => Json(views).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    match state.activities.list_by_project(project_id, today).await {
        Ok(views) => Json(views).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewActivity>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.activities.create(input).await {
        Ok(activity) => (StatusCode::CREATED, Json(activity)).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<ActivityPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.activities.update(id, patch).await {
        Ok(activity) => Json(activity).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.activities.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}
