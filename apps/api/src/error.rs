use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use warden_core::AppError;

mod types;

use types::ErrorResponse;

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Persistence(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Fault details stay in the log; clients get a generic message.
        let message = if self.0.is_fault() {
            tracing::error!(error = %self.0, "request failed");
            "internal server error".to_owned()
        } else {
            self.0.to_string()
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use warden_core::AppError;

    use super::ApiError;

    #[test]
    fn variants_map_to_status_codes() {
        let cases = [
            (AppError::Validation("v".to_owned()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("n".to_owned()), StatusCode::NOT_FOUND),
            (AppError::Conflict("c".to_owned()), StatusCode::CONFLICT),
            (AppError::Unauthorized("u".to_owned()), StatusCode::UNAUTHORIZED),
            (AppError::Forbidden("f".to_owned()), StatusCode::FORBIDDEN),
            (
                AppError::Persistence("p".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Internal("i".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError(error).into_response().status(), status);
        }
    }
}
