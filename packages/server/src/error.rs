use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application-level error type.
///
/// A missing form field is not an error here: it is recovered by redirecting
/// back to the form with flash messages.
#[derive(Debug)]
pub enum AppError {
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, &'static str) {
        match self {
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred",
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.status_and_body().into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("Flash encoding error: {}", err))
    }
}
