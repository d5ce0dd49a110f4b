//! Application error type mapping to HTTP status codes.
//!
//! Every error body is `{"error": "<short message>"}`. Detail stays in the
//! logs; visitors only see the short message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use folio_types::error::ContactError;

pub const MSG_INVALID_BODY: &str = "Invalid request body";
pub const MSG_MISSING_FIELDS: &str = "Missing required fields";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MSG_SAVE_FAILED: &str = "Failed to save message";
pub const MSG_UNKNOWN_SECTION: &str = "Unknown section";
pub const MSG_INTERNAL: &str = "Internal server error";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Body was not a JSON object of string fields.
    InvalidBody(String),
    Contact(ContactError),
    MethodNotAllowed,
    UnknownSection(String),
}

impl From<ContactError> for AppError {
    fn from(e: ContactError) -> Self {
        AppError::Contact(e)
    }
}

impl AppError {
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidBody(_) => (StatusCode::BAD_REQUEST, MSG_INVALID_BODY),
            AppError::Contact(ContactError::MissingFields) => {
                (StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS)
            }
            AppError::Contact(ContactError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SAVE_FAILED)
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED),
            AppError::UnknownSection(_) => (StatusCode::NOT_FOUND, MSG_UNKNOWN_SECTION),
        }
    }
}

/// `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        match &self {
            AppError::InvalidBody(detail) => tracing::debug!(%detail, "rejected request body"),
            AppError::UnknownSection(id) => tracing::debug!(container = %id, "unknown section"),
            _ => {}
        }
        error_response(status, message)
    }
}

#[cfg(test)]
mod tests {
    use folio_types::error::BackendError;

    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::InvalidBody("eof".into()), StatusCode::BAD_REQUEST, MSG_INVALID_BODY),
            (
                AppError::Contact(ContactError::MissingFields),
                StatusCode::BAD_REQUEST,
                MSG_MISSING_FIELDS,
            ),
            (
                AppError::Contact(ContactError::Storage(BackendError::NotConfigured)),
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_SAVE_FAILED,
            ),
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED),
            (
                AppError::UnknownSection("footer".into()),
                StatusCode::NOT_FOUND,
                MSG_UNKNOWN_SECTION,
            ),
        ];

        for (err, status, message) in cases {
            assert_eq!(err.status_and_message(), (status, message));
        }
    }
}
