//! Application error type mapping to HTTP status codes.
//!
//! The webhook contract fixes the failure bodies, so each variant carries its
//! exact status and payload instead of a shared envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use intelliagent_types::webhook::{EventRejection, INVALID_BODY, VERIFICATION_FAILED};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Webhook handshake rejected: 403, plain text.
    VerificationFailed,
    /// Event body was not JSON: 400, `{"error": "Invalid body"}`.
    InvalidBody,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::VerificationFailed => {
                (StatusCode::FORBIDDEN, VERIFICATION_FAILED).into_response()
            }
            AppError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                Json(EventRejection {
                    error: INVALID_BODY.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
