use serde::Serialize;

/// Error envelope for the create path.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}
