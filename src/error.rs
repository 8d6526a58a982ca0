use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chroma_core::ParseBlindnessError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color {input:?}: {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("Unknown blindness type: {0}")]
    UnknownBlindnessType(#[from] ParseBlindnessError),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("History index {index} out of range (history has {len} entries)")]
    HistoryIndexOutOfRange { index: usize, len: usize },

    #[error("Session not found")]
    SessionNotFound,

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Swatch grid too large: {width}x{height}")]
    GridTooLarge { width: u64, height: u64 },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidColor { .. }
            | ApiError::UnknownBlindnessType(_)
            | ApiError::UnsupportedFormat(_)
            | ApiError::HistoryIndexOutOfRange { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::SessionNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Export(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
