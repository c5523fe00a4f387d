use axum::{
    Router,
    http::StatusCode,
    routing::{get, patch},
};

use crate::modules::tracker::use_cases::activities::inbound::http as activities_http;
use crate::modules::tracker::use_cases::errors::ApplicationError;
use crate::modules::tracker::use_cases::people::inbound::http as people_http;
use crate::modules::tracker::use_cases::projects::inbound::http as projects_http;
use crate::modules::tracker::use_cases::subtasks::inbound::http as subtasks_http;
use crate::shared::infrastructure::store::StoreError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/people", get(people_http::list).post(people_http::create))
        .route(
            "/people/{id}",
            get(people_http::get_by_id)
                .patch(people_http::update)
                .delete(people_http::delete),
        )
        .route(
            "/projects",
            get(projects_http::list).post(projects_http::create),
        )
        .route(
            "/projects/{id}",
            get(projects_http::get_by_id)
                .patch(projects_http::update)
                .delete(projects_http::delete),
        )
        .route("/projects/{id}/stats", get(projects_http::stats))
        .route(
            "/projects/{id}/activities",
            get(activities_http::list_by_project),
        )
        .route(
            "/activities",
            get(activities_http::list).post(activities_http::create),
        )
        .route(
            "/activities/{id}",
            patch(activities_http::update).delete(activities_http::delete),
        )
        .route(
            "/activities/{id}/subtasks",
            get(subtasks_http::list_by_activity),
        )
        .route(
            "/subtasks",
            get(subtasks_http::list).post(subtasks_http::create),
        )
        .route(
            "/subtasks/{id}",
            patch(subtasks_http::update).delete(subtasks_http::delete),
        )
        .with_state(state)
}

/// One place for the error-to-status mapping every inbound handler uses.
pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Domain(_) => StatusCode::CONFLICT,
        ApplicationError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
        ApplicationError::Store(StoreError::DuplicateCode { .. }) => StatusCode::CONFLICT,
        ApplicationError::Store(StoreError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        ApplicationError::Rollup(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
