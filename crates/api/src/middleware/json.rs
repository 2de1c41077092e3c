//! JSON body extraction for webhook requests.

use axum::extract::FromRequest;

use super::error_handling::AppError;

/// [`axum::Json`] whose rejection is an [`AppError`], so a malformed body gets
/// a `{"error", "code"}` response instead of plain text.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct WebhookJson<T>(pub T);
