use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::tracker::core::entities::ProjectPatch;
use crate::modules::tracker::use_cases::projects::handler::NewProject;
use crate::shell::http::status_for;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.projects.list().await {
        Ok(views) => Json(views).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.projects.get(id).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewProject>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.projects.create(input).await {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<ProjectPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.projects.update(id, patch).await {
        Ok(project) => Json(project).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.projects.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn stats(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    // the clock is read at the edge; everything below takes `today` as input
    let today = Utc::now().date_naive();
    match state.projects.stats(id, today).await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}
