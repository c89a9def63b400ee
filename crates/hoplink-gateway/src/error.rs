use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hoplink_redirector::ResolveError;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, AppError>;

pub enum AppError {
    /// Expected resolution failure; its message is the response body.
    Resolve(ResolveError),
    /// Anything else. Logged in full, surfaced only as a generic 500.
    Unexpected(String),
}

impl From<ResolveError> for AppError {
    fn from(value: ResolveError) -> Self {
        Self::Resolve(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Resolve(e) => {
                warn!(error = %e, "resolution failed");
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            AppError::Unexpected(detail) => {
                error!(detail = %detail, "unexpected failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
