//! Error types for the Extrato server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
///
/// Display strings double as the wire `detail` field, so the literal
/// wording is part of the API contract.
#[derive(Error, Debug)]
pub enum AppError {
    /// Upload rejected before conversion: missing file field, missing
    /// filename, or a filename without a `.pdf` extension.
    #[error("Arquivo deve ser PDF")]
    InvalidFile,

    /// Multipart body could not be decoded.
    #[error("Upload invalido: {0}")]
    UploadRead(String),

    /// Conversion pipeline failed after the upload was accepted.
    #[error("Erro na extracao: {0}")]
    Extraction(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidFile | AppError::UploadRead(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_file_message() {
        assert_eq!(AppError::InvalidFile.to_string(), "Arquivo deve ser PDF");
    }

    #[test]
    fn test_extraction_message_carries_cause() {
        let err = AppError::Extraction("cannot open document".to_string());
        assert_eq!(err.to_string(), "Erro na extracao: cannot open document");
    }

    #[test]
    fn test_status_codes() {
        let resp = AppError::InvalidFile.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::UploadRead("truncated".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::Extraction("boom".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
