use super::types::{HealthResponse, INDEX_HTML};
use crate::chat::{
    ApiRequest, ApiResponse, ChatPayload, ChatService, ScenarioPayload, SummarizePayload,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ChatService>,
}

impl AppState {
    pub fn new(service: ChatService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

async fn handle<T>(
    state: AppState,
    payload: Result<Json<T>, JsonRejection>,
    wrap: fn(T) -> ApiRequest,
) -> ApiResponse {
    match payload {
        Ok(Json(payload)) => state.service.handle(wrap(payload)).await,
        Err(rejection) => {
            warn!("Rejected malformed request body: {}", rejection.body_text());
            ApiResponse::bad_request(rejection.body_text())
        }
    }
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatPayload>, JsonRejection>,
) -> ApiResponse {
    handle(state, payload, ApiRequest::Chat).await
}

pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizePayload>, JsonRejection>,
) -> ApiResponse {
    handle(state, payload, ApiRequest::Summarize).await
}

pub async fn scenario(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioPayload>, JsonRejection>,
) -> ApiResponse {
    handle(state, payload, ApiRequest::Scenario).await
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
