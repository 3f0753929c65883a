//! JSON Body Extractor
//!
//! `axum::Json` answers a bad body with a plain-text rejection. [`ValidJson`]
//! maps the same rejections onto [`AppError`] so clients always get the
//! `{code, message, details}` envelope.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::AppError;
use shared::error::ErrorCode;

/// JSON body extractor with `AppError` rejections
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let detail = rejection.body_text();
    tracing::debug!(%detail, "Rejected request body");
    match rejection {
        // Well-formed JSON that does not fit the payload type: missing field, wrong type
        JsonRejection::JsonDataError(_) => AppError::validation(detail),
        JsonRejection::JsonSyntaxError(_) => AppError::invalid_format(detail),
        // Missing content type, unreadable body
        _ => AppError::with_message(ErrorCode::InvalidRequest, detail),
    }
}
