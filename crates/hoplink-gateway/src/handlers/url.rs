use crate::error::{AppError, Result};
use crate::model::ErrorBody;
use crate::state::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hoplink_redirector::Resolution;
use hoplink_shortener::CreateError;
use tracing::{error, warn};

/// Create endpoint.
///
/// The raw body is handed to the creator untouched. The response is
/// always a 200 envelope carrying either the code and shortened URL or
/// an `error` field; no other status is modeled on this path.
pub async fn create_url_handler(State(state): State<AppState>, body: String) -> Response {
    match state.creator().create(&body).await {
        Ok(response) => Json(response).into_response(),
        Err(CreateError::InvalidInput(reason)) => {
            warn!(reason = %reason, "create request rejected");
            Json(ErrorBody {
                error: format!("Invalid input: {reason}"),
            })
            .into_response()
        }
        Err(e) => {
            error!(error = %e, "create request failed");
            Json(ErrorBody {
                error: "Internal Server Error".to_string(),
            })
            .into_response()
        }
    }
}

/// Resolve endpoint: 302 with a Location header for a live record, 410
/// once expired, 400 for anything the resolver rejects.
pub async fn resolve_url_handler(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    match state.redirector().resolve(uri.path()).await? {
        Resolution::Redirect(url) => redirect_response(&url),
        Resolution::Expired => Ok((StatusCode::GONE, "This URL has expired.").into_response()),
    }
}

fn redirect_response(url: &str) -> Result<Response> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, url)
        .body(Body::empty())
        .map_err(|e| AppError::Unexpected(format!("building redirect response: {e}")))
}
