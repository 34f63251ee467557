use axum::extract::{FromRequest, rejection::JsonRejection};

use crate::app_error::AppError;

/// `Json` extractor whose rejections render as the API's error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::InvalidInput("Expected a JSON request body".into())
            }
            other => AppError::validation("body", other.body_text()),
        }
    }
}
