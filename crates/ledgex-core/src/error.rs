use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("document is password protected: {0}")]
    Password(String),

    #[error("no bank format matched the document and no default format is configured")]
    NoFormat,

    #[error("failed to load bank formats from {path}: {reason}")]
    FormatsLoad { path: PathBuf, reason: String },

    #[error("invalid bank formats: {0}")]
    FormatsInvalid(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to read page {page}: {reason}")]
    Page { page: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
