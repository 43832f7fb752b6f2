use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calculator::CalcError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalcError),
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Anything the caller got wrong, from an unparsable query string to a
/// down payment larger than the vehicle, is a 422.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Calculation(CalcError::InvalidProgram(message)) => {
                tracing::error!(error = %message, "Lease program misconfigured.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A server configuration error occurred".to_string(),
                )
            }
            AppError::Calculation(calc_err) => {
                tracing::debug!(error = %calc_err, "Rejected calculation input.");
                (StatusCode::UNPROCESSABLE_ENTITY, calc_err.to_string())
            }
            AppError::InvalidQuery(rejection) => {
                tracing::debug!(error = %rejection, "Rejected query string.");
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
