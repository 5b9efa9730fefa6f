// src/error.rs

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::{client::CmsError, view};

/// Global Application Error Enum.
/// Centralizes error handling and mapping to rendered HTML responses.
#[derive(Debug, Error)]
pub enum AppError {
    // 404 Not Found (empty page list)
    #[error("no page found")]
    NotFound,

    // 502 Bad Gateway (CMS fetch failed)
    #[error("{0}")]
    Upstream(String),
}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into an HTML document with the matching status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, view::not_found_document()),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, view::error_document(&msg)),
        };

        (status, Html(body)).into_response()
    }
}

/// Converts `CmsError` into `AppError::Upstream`, keeping its message verbatim.
/// Allows using `?` operator on CMS fetches.
impl From<CmsError> for AppError {
    fn from(err: CmsError) -> Self {
        AppError::Upstream(err.to_string())
    }
}
