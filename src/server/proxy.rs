//! The four proxied operations, shared by the JSON routes and the server
//! functions used by the hydrated UI.

use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::Value;

use crate::error::ApiError;
use crate::model::personality::DEFAULT_PERSONALITY;
use crate::model::search::{normalize_search_response, ChatRequest, ChatResponse};
use crate::server::backend::{BackendClient, BackendReply, BookUpload};

pub async fn search(
    backend: &BackendClient,
    request: ChatRequest,
) -> Result<ChatResponse, ApiError> {
    let query = request.into_query().ok_or(ApiError::MissingQuery)?;

    tracing::info!(
        query = %query.text,
        index_name = ?query.index_name,
        limit = query.limit,
        personality = %query.personality,
        "searching books"
    );

    let raw = backend.search_books(&query).await.map_err(ApiError::Search)?;
    tracing::debug!(payload = %raw, "backend search response");

    Ok(normalize_search_response(&raw))
}

pub async fn greeting(
    backend: &BackendClient,
    personality: Option<String>,
) -> Result<Value, ApiError> {
    let personality = personality
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PERSONALITY.to_string());

    tracing::info!(%personality, "fetching greeting");
    let payload = backend.greeting(&personality).await.map_err(ApiError::Greeting)?;
    tracing::debug!(%payload, "backend greeting response");

    Ok(payload)
}

pub async fn book_indexes(backend: &BackendClient) -> Result<Value, ApiError> {
    backend.book_indexes().await.map_err(ApiError::Indexes)
}

/// Pass a browser multipart body through to the backend as is.
pub async fn forward_upload(
    backend: &BackendClient,
    content_type: &str,
    body: Bytes,
) -> Result<Value, ApiError> {
    tracing::info!(bytes = body.len(), "forwarding book upload");
    let reply = backend
        .forward_upload(content_type, body)
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?;

    upload_outcome(reply)
}

pub async fn upload_book(backend: &BackendClient, upload: BookUpload) -> Result<Value, ApiError> {
    tracing::info!(
        file_name = %upload.file_name,
        index_name = ?upload.index_name,
        bytes = upload.content.len(),
        "uploading book"
    );
    let reply = backend
        .upload_book(upload)
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?;

    upload_outcome(reply)
}

/// Refuses an upload body that has grown past `limit` bytes.
pub fn ensure_within_limit(len: usize, limit: usize) -> Result<(), ApiError> {
    if len <= limit {
        return Ok(());
    }

    Err(ApiError::UploadRejected {
        status: StatusCode::PAYLOAD_TOO_LARGE,
        detail: format!("Upload exceeds the limit of {limit} bytes"),
    })
}

fn upload_outcome(reply: BackendReply) -> Result<Value, ApiError> {
    if reply.status.is_success() {
        return Ok(reply.body);
    }

    let detail = reply
        .body
        .get("detail")
        .and_then(Value::as_str)
        .filter(|d| !d.is_empty())
        .unwrap_or("Upload failed")
        .to_string();

    Err(ApiError::UploadRejected {
        status: reply.status,
        detail,
    })
}
