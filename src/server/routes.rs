use axum::{
    extract::{
        rejection::{BytesRejection, JsonRejection},
        DefaultBodyLimit, FromRef, Query, State,
    },
    http::{header, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::model::search::{ChatRequest, ChatResponse};
use crate::server::backend::BackendClient;
use crate::server::proxy;

/// JSON proxy routes under `/api`, usable with any state that can hand out a
/// [`BackendClient`].
pub fn api_routes<S>(upload_limit: usize) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    BackendClient: FromRef<S>,
{
    Router::new()
        .route("/api/chat", get(greeting).post(chat))
        .route("/api/index", get(book_indexes))
        .route(
            "/api/upload-book",
            post(upload_book).layer(DefaultBodyLimit::max(upload_limit)),
        )
}

#[derive(Debug, Deserialize)]
pub struct GreetingParams {
    personality: Option<String>,
}

/// `POST /api/chat`
pub async fn chat(
    State(backend): State<BackendClient>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    proxy::search(&backend, request).await.map(Json)
}

/// `GET /api/chat?personality=`
pub async fn greeting(
    State(backend): State<BackendClient>,
    Query(params): Query<GreetingParams>,
) -> Result<Json<Value>, ApiError> {
    proxy::greeting(&backend, params.personality).await.map(Json)
}

/// `GET /api/index`
pub async fn book_indexes(State(backend): State<BackendClient>) -> Result<Json<Value>, ApiError> {
    proxy::book_indexes(&backend).await.map(Json)
}

/// `POST /api/upload-book`
pub async fn upload_book(
    State(backend): State<BackendClient>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = body.map_err(|e| ApiError::UploadRejected {
        status: e.status(),
        detail: e.body_text(),
    })?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .filter(|v| v.starts_with("multipart/form-data"))
        .ok_or_else(|| ApiError::Upload("expected a multipart/form-data body".into()))?;

    proxy::forward_upload(&backend, content_type, body).await.map(Json)
}
