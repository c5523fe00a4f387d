use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::tracker::core::entities::PersonPatch;
use crate::modules::tracker::use_cases::people::handler::NewPerson;
use crate::shell::http::status_for;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.people.list().await {
        Ok(people) => Json(people).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.people.get(id).await {
        Ok(person) => Json(person).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewPerson>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.people.create(input).await {
        Ok(person) => (StatusCode::CREATED, Json(person)).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<PersonPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.people.update(id, patch).await {
        Ok(person) => Json(person).into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.people.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => status_for(&e).into_response(),
    }
}

#[cfg(test)]
mod people_http_inbound_tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::http::router;
    use crate::shell::state::AppState;

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_created_person() {
        let app = router(AppState::in_memory());
        let body = r#"{"code":"p-0001","name":"Alice","sector":"Engineering"}"#;
        let response = app.oneshot(json_request("POST", "/people", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "p-0001");
        assert_eq!(json["active"], true);
    }

    #[tokio::test]
    async fn it_should_return_409_on_a_duplicate_code() {
        let app = router(AppState::in_memory());
        let body = r#"{"code":"p-0001","name":"Alice","sector":"Engineering"}"#;
        let first = app
            .clone()
            .oneshot(json_request("POST", "/people", body))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);
        let second = app.oneshot(json_request("POST", "/people", body)).await.unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let app = router(AppState::in_memory());
        let response = app
            .oneshot(json_request("POST", "/people", "not-json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_person() {
        let app = router(AppState::in_memory());
        let response = app
            .oneshot(
                Request::get("/people/00000000-0000-0000-0000-000000000000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
