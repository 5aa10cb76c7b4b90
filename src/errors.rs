// src/errors.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::pdf::PdfError;
use crate::qa::QaError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid file type. Only PDFs are allowed.")]
    InvalidContentType,

    #[error("No file field in upload")]
    MissingFile,

    #[error("{0}")]
    Pdf(#[from] PdfError),

    #[error("{0}")]
    Qa(#[from] QaError),

    #[error("Multipart error: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidContentType | Self::MissingFile | Self::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Pdf(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Qa(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let request_id = Uuid::new_v4().to_string()[..8].to_string();
        HttpResponse::build(self.status_code()).json(json!({
            "status": "error",
            "message": self.to_string(),
            "request_id": request_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_content_type_is_bad_request() {
        let err = ServiceError::InvalidContentType;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Only PDFs"));
    }

    #[test]
    fn test_pdf_error_is_unprocessable() {
        let err = ServiceError::Pdf(PdfError::Extraction("bad xref".to_string()));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_qa_error_is_bad_gateway() {
        let err = ServiceError::Qa(QaError::ConnectionFailed("refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
