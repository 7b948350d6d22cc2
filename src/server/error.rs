//! HTTP-facing error type.
//!
//! Two cases reach clients: client-input errors (400, code
//! `invalid_request`) and delegate failures (500, code taken from the
//! download-error subcategory). The detail is the trimmed tool
//! diagnostic, not the raw stderr dump.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::core::error::AppError;
use crate::download::error::DownloadError;

/// Wire shape for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
    code: &'static str,
}

/// Error carried out of handlers: status plus structured code and detail.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "invalid_request",
            detail: detail.into(),
        }
    }

    pub fn internal(code: &'static str, detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            detail: self.detail,
            code: self.code,
        });

        (self.status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(msg) => ApiError::bad_request(msg),
            AppError::Url(e) => ApiError::bad_request(format!("Invalid URL: {}", e)),
            AppError::Download(e) => ApiError::internal(e.subcategory(), e.message().to_string()),
            AppError::Io(e) => ApiError::internal("io", e.to_string()),
        }
    }
}

impl From<DownloadError> for ApiError {
    fn from(err: DownloadError) -> Self {
        ApiError::from(AppError::Download(err))
    }
}
