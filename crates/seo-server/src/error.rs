use axum::extract::rejection::JsonRejection;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("no stored analysis for post {0}")]
    NotFound(String),

    #[error("rate limit exceeded (RATE_LIMIT_RPS={rps}): try again in ~{retry_after_ms}ms")]
    RateLimited { rps: u32, retry_after_ms: u64 },

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::InvalidBody(rejection) => rejection.status(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Server misconfigured",
            AppError::NotFound(_) => "Snapshot not found",
            AppError::RateLimited { .. } => "Rate limit exceeded",
            AppError::InvalidBody(_) => "Invalid request body",
        }
    }
}

/// Renders as `{success: false, error, message}` with a matching status.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.label(),
            "message": self.to_string(),
        }));
        let mut response = (self.status(), body).into_response();

        if let AppError::RateLimited { retry_after_ms, .. } = self {
            let secs = retry_after_ms.div_ceil(1000).max(1);
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}
