use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("please select at least one service or package")]
    NoSelection,

    #[error("select either a package or individual services, not both")]
    ConflictingSelection,

    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("unknown package: {0}")]
    UnknownPackage(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("appointment date {0} is in the past")]
    DateInPast(String),

    #[error("invalid time '{0}', expected a 30-minute slot between 08:00 and 21:30")]
    InvalidTime(String),

    #[error("unknown category '{0}', expected hair, beauty or grooming")]
    UnknownCategory(String),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("invalid status '{0}', expected pending, confirmed, completed or cancelled")]
    InvalidStatus(String),

    #[error("malformed request: {0}")]
    MalformedBody(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Storage(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({ "success": false, "message": message });
        (status, axum::Json(body)).into_response()
    }
}
