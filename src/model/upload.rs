use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ACCEPTED_EXTENSION: &str = ".txt";

/// Reasons an upload is refused in the browser, before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Please select a file first.")]
    NoFile,
    #[error("Only .txt files are supported.")]
    UnsupportedType,
}

pub fn validate_upload(file_name: Option<&str>) -> Result<(), UploadRejection> {
    match file_name {
        None | Some("") => Err(UploadRejection::NoFile),
        Some(name) if !name.ends_with(ACCEPTED_EXTENSION) => Err(UploadRejection::UnsupportedType),
        Some(_) => Ok(()),
    }
}

/// Optional index name as sent in the form: trimmed, omitted when blank.
pub fn index_name_field(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Success body of the backend's `/upload-book`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub index_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Info => "status-banner info",
            StatusKind::Success => "status-banner success",
            StatusKind::Error => "status-banner error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn uploading() -> Self {
        Self::info("Uploading file...")
    }

    pub fn uploaded(receipt: &UploadReceipt) -> Self {
        Self {
            kind: StatusKind::Success,
            message: format!(
                "File uploaded successfully! Processing started for index: {}",
                receipt.index_name
            ),
        }
    }

    pub fn failed(detail: &str) -> Self {
        let detail = if detail.is_empty() { "Unknown error" } else { detail };
        Self::error(format!("Error: {detail}"))
    }
}

impl From<UploadRejection> for StatusMessage {
    fn from(rejection: UploadRejection) -> Self {
        Self::error(rejection.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_files_are_accepted() {
        assert_eq!(validate_upload(Some("moby-dick.txt")), Ok(()));
    }

    #[test]
    fn missing_file_is_rejected() {
        assert_eq!(validate_upload(None), Err(UploadRejection::NoFile));
        assert_eq!(validate_upload(Some("")), Err(UploadRejection::NoFile));
    }

    #[test]
    fn other_extensions_are_rejected() {
        for name in ["moby-dick.pdf", "moby-dick.epub", "txt", "notes.TXT"] {
            assert_eq!(
                validate_upload(Some(name)),
                Err(UploadRejection::UnsupportedType),
                "{name}"
            );
        }
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            StatusMessage::from(UploadRejection::UnsupportedType).message,
            "Only .txt files are supported."
        );
        assert_eq!(StatusMessage::from(UploadRejection::NoFile).kind, StatusKind::Error);
    }

    #[test]
    fn blank_index_name_is_omitted() {
        assert_eq!(index_name_field("   "), None);
        assert_eq!(index_name_field(" whaling "), Some("whaling".to_string()));
    }

    #[test]
    fn status_texts() {
        let receipt = UploadReceipt { index_name: "moby-dick".into() };
        assert_eq!(
            StatusMessage::uploaded(&receipt).message,
            "File uploaded successfully! Processing started for index: moby-dick"
        );
        assert_eq!(StatusMessage::failed("").message, "Error: Unknown error");
        assert_eq!(StatusMessage::failed("File too large").message, "Error: File too large");
    }
}
