//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and a JSON body of the form
//! `{"error": "...", "code": "..."}`. Booking rejections keep their reason code
//! and also carry `"success": false` so the voice assistant can branch on it.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use teetalk_core::{errors::TeeTimeError, models::booking::RejectionReason};

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use teetalk_api::middleware::error_handling::AppError;
/// use teetalk_core::errors::TeeTimeError;
///
/// async fn handler(course_id: String) -> Result<Json<String>, AppError> {
///     if course_id.is_empty() {
///         return Err(AppError(TeeTimeError::NotFound("course ''".to_string())));
///     }
///     Ok(Json(course_id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub TeeTimeError);

impl AppError {
    /// HTTP status for the wrapped error
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TeeTimeError::NotFound(_) => StatusCode::NOT_FOUND,
            TeeTimeError::Validation(_) => StatusCode::BAD_REQUEST,
            TeeTimeError::Rejected(reason) => rejection_status(*reason),
            TeeTimeError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TeeTimeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code for the wrapped error
    pub fn code(&self) -> &'static str {
        match &self.0 {
            TeeTimeError::NotFound(_) => "NOT_FOUND",
            TeeTimeError::Validation(_) => "VALIDATION",
            TeeTimeError::Rejected(reason) => reason.code(),
            TeeTimeError::Configuration(_) => "CONFIGURATION",
            TeeTimeError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Malformed or incomplete requests are the caller's fault; a well-formed
/// request for an unavailable time is unprocessable.
fn rejection_status(reason: RejectionReason) -> StatusCode {
    match reason {
        RejectionReason::InvalidFormat
        | RejectionReason::MissingContactInfo
        | RejectionReason::InvalidPartySize => StatusCode::BAD_REQUEST,
        RejectionReason::OutsideOperatingHours | RejectionReason::TimeAlreadyPassed => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.0.to_string();

        let body = match &self.0 {
            TeeTimeError::Rejected(reason) => Json(json!({
                "success": false,
                "error": message,
                "code": code,
                "message": format!("Unable to complete booking: {}", reason),
            })),
            _ => Json(json!({ "error": message, "code": code })),
        };

        (status, body).into_response()
    }
}

/// Automatic conversion from TeeTimeError to AppError
impl From<TeeTimeError> for AppError {
    fn from(err: TeeTimeError) -> Self {
        AppError(err)
    }
}

/// Lets handlers use `?` on a [`RejectionReason`] directly
impl From<RejectionReason> for AppError {
    fn from(reason: RejectionReason) -> Self {
        AppError(TeeTimeError::Rejected(reason))
    }
}

/// Bodies that are not JSON objects never reach a handler; they answer with
/// the same error shape as every other failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(TeeTimeError::Validation(rejection.body_text()))
    }
}

/// Maps a TeeTimeError to an HTTP response
pub fn map_error(err: TeeTimeError) -> Response {
    AppError(err).into_response()
}
