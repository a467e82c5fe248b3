use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::server::backend::BackendError;

pub const UPLOAD_FAILED: &str = "Internal server error";
const INDEXES_FAILED: &str = "Failed to fetch book indexes";

/// Failures of the proxy routes, each mapped to the status and body the
/// browser expects.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Query is required")]
    MissingQuery,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Error searching books: {0}")]
    Search(BackendError),

    #[error("Error getting greeting: {0}")]
    Greeting(BackendError),

    #[error("Error fetching book indexes: {0}")]
    Indexes(BackendError),

    /// The upload was refused, either by the backend or because the body
    /// could not be read within the size limit.
    #[error("{detail}")]
    UploadRejected { status: StatusCode, detail: String },

    #[error("Error uploading book: {0}")]
    Upload(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UploadRejected { status, .. } => *status,
            ApiError::Search(_)
            | ApiError::Greeting(_)
            | ApiError::Indexes(_)
            | ApiError::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text a browser is allowed to see, matching the `error` or `detail`
    /// field of the JSON body.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Upload(_) => UPLOAD_FAILED.to_string(),
            ApiError::Indexes(_) => INDEXES_FAILED.to_string(),
            other => other.to_string(),
        }
    }

    fn body(&self) -> Value {
        match self {
            ApiError::MissingQuery | ApiError::InvalidBody(_) => {
                json!({ "error": self.to_string() })
            }
            ApiError::Search(_) => {
                json!({ "error": "Failed to search books", "message": self.to_string() })
            }
            ApiError::Greeting(_) => {
                json!({ "error": "Failed to get greeting", "message": self.to_string() })
            }
            ApiError::Indexes(_) => json!({ "error": INDEXES_FAILED }),
            ApiError::UploadRejected { detail, .. } => json!({ "detail": detail }),
            ApiError::Upload(_) => json!({ "detail": UPLOAD_FAILED }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("rejected request: {self}");
        }

        (status, Json(self.body())).into_response()
    }
}
