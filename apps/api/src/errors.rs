use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Deliberately coarse: everything past "the file field was present" collapses
/// into one opaque 500 with the detail kept server-side only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no file uploaded")]
    MissingFile,

    #[error("analysis failed: {0}")]
    Analysis(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFile => (StatusCode::BAD_REQUEST, "No file uploaded"),
            AppError::Analysis(e) => {
                tracing::error!("Analysis error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong while analyzing.",
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
