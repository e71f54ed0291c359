use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Error taxonomy at the handler boundary. Store-level failures arrive via
/// `ResultExt` as `Internal` and are never swallowed or retried.
#[derive(Debug)]
pub enum AppError {
    NotFound(&'static str),
    Input(&'static str),
    Validation(Vec<String>),
    Unauthorized,
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, body) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "error": message })),
            AppError::Input(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "invalid quiz data", "details": details }),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "unauthorized: no platform user id" }),
            ),
            AppError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
        };
        (code, Json(body)).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the underlying failure and surface an opaque 500.
    fn reject(self, message: &'static str) -> Result<T, AppError>;

    /// Log the underlying failure and surface it as a 400.
    fn reject_input(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }

    fn reject_input(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Input(message)
        })
    }
}
