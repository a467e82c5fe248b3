use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::model::search::SearchQuery;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Status and decoded body of a backend reply, whatever the status.
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub status: StatusCode,
    pub body: Value,
}

/// A book file to be forwarded as a fresh multipart request.
#[derive(Debug, Clone)]
pub struct BookUpload {
    pub file_name: String,
    pub content: Bytes,
    pub index_name: Option<String>,
}

/// HTTP client for the search backend.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// `POST /search-books` with the query carried in the query string.
    pub async fn search_books(&self, query: &SearchQuery) -> Result<Value, BackendError> {
        let resp = self
            .http
            .post(self.url("search-books"))
            .query(&query.query_params())
            .header(http::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        json_or_status(resp).await
    }

    pub async fn greeting(&self, personality: &str) -> Result<Value, BackendError> {
        let resp = self
            .http
            .get(self.url("greeting"))
            .query(&[("personality", personality)])
            .header(http::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        json_or_status(resp).await
    }

    pub async fn book_indexes(&self) -> Result<Value, BackendError> {
        let resp = self.http.get(self.url("book-indexes")).send().await?;
        json_or_status(resp).await
    }

    /// Send an already encoded multipart body to `/upload-book` untouched.
    pub async fn forward_upload(
        &self,
        content_type: &str,
        body: Bytes,
    ) -> Result<BackendReply, BackendError> {
        let resp = self
            .http
            .post(self.url("upload-book"))
            .header(http::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;

        reply(resp).await
    }

    pub async fn upload_book(&self, upload: BookUpload) -> Result<BackendReply, BackendError> {
        let part = reqwest::multipart::Part::bytes(upload.content.to_vec())
            .file_name(upload.file_name)
            .mime_str("text/plain")?;

        let mut form = reqwest::multipart::Form::new().part("file", part);
        if let Some(index_name) = upload.index_name {
            form = form.text("index_name", index_name);
        }

        let resp = self
            .http
            .post(self.url("upload-book"))
            .multipart(form)
            .send()
            .await?;

        reply(resp).await
    }
}

async fn json_or_status(resp: reqwest::Response) -> Result<Value, BackendError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(BackendError::Status { status, body });
    }

    Ok(resp.json().await?)
}

async fn reply(resp: reqwest::Response) -> Result<BackendReply, BackendError> {
    let status = resp.status();
    let body = resp.json().await?;
    Ok(BackendReply { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = BackendClient::new(reqwest::Client::new(), "http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("book-indexes"), "http://localhost:8000/book-indexes");
    }

    #[test]
    fn status_error_carries_status_and_body() {
        let err = BackendError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "index offline".into(),
        };
        assert_eq!(err.to_string(), "502 Bad Gateway - index offline");
    }
}
