use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Too many requests. Please slow down.")]
    RateLimited,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Payment for this order has not been confirmed")]
    NotConfirmed,

    #[error("Download link has expired")]
    Expired,

    #[error("Download limit reached")]
    QuotaExceeded,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::RateLimited => ErrorCode::RateLimited,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::NotConfirmed => ErrorCode::OrderNotConfirmed,
            AppError::Expired => ErrorCode::DownloadExpired,
            AppError::QuotaExceeded => ErrorCode::DownloadLimitReached,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    DatabaseError,
    RateLimited,
    InvalidInput,
    ValidationError,
    NotFound,
    OrderNotConfirmed,
    DownloadExpired,
    DownloadLimitReached,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::RateLimited => "RATE_LIMITED",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::OrderNotConfirmed => "ORDER_NOT_CONFIRMED",
            ErrorCode::DownloadExpired => "DOWNLOAD_EXPIRED",
            ErrorCode::DownloadLimitReached => "DOWNLOAD_LIMIT_REACHED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
