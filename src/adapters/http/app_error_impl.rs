use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        match &self {
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = ?self, "Request failed")
            }
            _ => tracing::warn!(error = ?self, "Request rejected"),
        }

        let code = self.code();
        match self {
            AppError::Database(_) | AppError::Internal(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                code,
                "Internal server error".into(),
                None,
            ),
            AppError::Validation { field, message } => error_resp(
                StatusCode::UNPROCESSABLE_ENTITY,
                code,
                format!("{field} {message}"),
                Some(field),
            ),
            AppError::InvalidInput(msg) => error_resp(StatusCode::BAD_REQUEST, code, msg, None),
            other => {
                let status = match other {
                    AppError::NotFound(_) => StatusCode::NOT_FOUND,
                    AppError::NotConfirmed => StatusCode::CONFLICT,
                    AppError::Expired => StatusCode::GONE,
                    AppError::QuotaExceeded => StatusCode::FORBIDDEN,
                    _ => StatusCode::TOO_MANY_REQUESTS,
                };
                error_resp(status, code, other.to_string(), None)
            }
        }
    }
}

fn error_resp(
    status: StatusCode,
    code: ErrorCode,
    message: String,
    field: Option<&'static str>,
) -> Response {
    let body = match field {
        Some(field) => serde_json::json!({
            "success": false,
            "code": code.as_str(),
            "message": message,
            "field": field,
        }),
        None => serde_json::json!({
            "success": false,
            "code": code.as_str(),
            "message": message,
        }),
    };
    (status, Json(body)).into_response()
}
