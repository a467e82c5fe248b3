use leptos::prelude::*;
use serde_json::Value;
use server_fn::codec::{MultipartData, MultipartFormData};

#[allow(unused_imports)]
use crate::model::search::{ChatRequest, ChatResponse};
#[allow(unused_imports)]
use crate::model::upload::UploadReceipt;

#[server]
pub async fn list_indexes() -> Result<Vec<String>, ServerFnError> {
    let state = expect_context::<crate::server::state::AppState>();
    let listing = crate::server::proxy::book_indexes(&state.backend)
        .await
        .map_err(|e| ServerFnError::new(e.client_message()))?;

    Ok(crate::model::index::index_names(&listing))
}

#[server]
pub async fn greeting(#[server(default)] personality: String) -> Result<Value, ServerFnError> {
    let state = expect_context::<crate::server::state::AppState>();
    crate::server::proxy::greeting(&state.backend, Some(personality))
        .await
        .map_err(|e| ServerFnError::new(e.client_message()))
}

#[server]
pub async fn search_books(
    query: String,
    #[server(default)] index_name: Option<String>,
    #[server(default)] limit: Option<u32>,
    #[server(default)] personality: Option<String>,
) -> Result<ChatResponse, ServerFnError> {
    let state = expect_context::<crate::server::state::AppState>();
    let request = ChatRequest {
        query: Some(query),
        index_name,
        limit,
        personality,
    };

    crate::server::proxy::search(&state.backend, request)
        .await
        .map_err(|e| ServerFnError::new(e.client_message()))
}

#[server(input = MultipartFormData)]
pub async fn upload_book(data: MultipartData) -> Result<UploadReceipt, ServerFnError> {
    use crate::model::upload::{index_name_field, validate_upload};
    use crate::server::backend::BookUpload;
    use crate::server::proxy::ensure_within_limit;

    let state = expect_context::<crate::server::state::AppState>();
    let mut multipart = data
        .into_inner()
        .ok_or_else(|| ServerFnError::new("missing multipart body"))?;

    let mut file = None;
    let mut index_name = None;
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    {
        match field.name().map(str::to_owned).as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let mut content = bytes::BytesMut::new();
                while let Some(chunk) = field
                    .chunk()
                    .await
                    .map_err(|e| ServerFnError::new(e.to_string()))?
                {
                    content.extend_from_slice(&chunk);
                    ensure_within_limit(content.len(), state.upload_limit)
                        .map_err(|e| ServerFnError::new(e.client_message()))?;
                }
                file = Some((file_name, content.freeze()));
            }
            Some("index_name") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ServerFnError::new(e.to_string()))?;
                index_name = index_name_field(&text);
            }
            _ => {}
        }
    }

    let (file_name, content) =
        file.ok_or_else(|| ServerFnError::new("Please select a file first."))?;
    validate_upload(Some(&file_name)).map_err(|e| ServerFnError::new(e.to_string()))?;

    let body = crate::server::proxy::upload_book(
        &state.backend,
        BookUpload {
            file_name,
            content,
            index_name,
        },
    )
    .await
    .map_err(|e| ServerFnError::new(e.client_message()))?;

    serde_json::from_value(body).map_err(|e| {
        tracing::error!(error = %e, "unexpected upload reply");
        ServerFnError::new(crate::error::UPLOAD_FAILED)
    })
}

/// Message to show for a failed server function call.
pub fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}
