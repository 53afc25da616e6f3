//! Errors raised by REST handlers.
//!
//! | Source | HTTP status | Envelope `error` |
//! |--------|-------------|------------------|
//! | Body rejected by the JSON extractor (syntax, field validation, content type) | 422 | `Validation Error` |
//! | Store failure | 500 | `Internal Server Error` |
//!
//! "Patient not found" is not an error here: handlers answer it with an error envelope on a
//! normal 200 response.

use api_shared::ErrorResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hospital_core::PatientError;

#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be turned into a valid request schema.
    Rejected(String),
    /// The store failed while serving the request.
    Persistence(PatientError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.body_text())
    }
}

impl From<PatientError> for ApiError {
    fn from(err: PatientError) -> Self {
        ApiError::Persistence(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Rejected(message) => {
                tracing::debug!("request rejected: {}", message);
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                let body = ErrorResponse::new("Validation Error", status.as_u16(), message);
                (status, Json(body)).into_response()
            }
            ApiError::Persistence(err) => {
                tracing::error!("Patient store error: {:?}", err);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body =
                    ErrorResponse::new("Internal Server Error", status.as_u16(), "Internal error");
                (status, Json(body)).into_response()
            }
        }
    }
}
