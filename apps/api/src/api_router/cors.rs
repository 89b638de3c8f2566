use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use warden_core::AppError;

/// Without a configured origin no cross-origin request is allowed.
pub(super) fn build_cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let Some(allowed_origin) = allowed_origin else {
        return Ok(layer);
    };

    Ok(layer.allow_origin(HeaderValue::from_str(allowed_origin).map_err(|error| {
        AppError::Validation(format!("invalid CORS_ALLOWED_ORIGIN: {error}"))
    })?))
}
