use serde::{Deserialize, Serialize};

/// Wire-format create request.
///
/// Both fields arrive as strings; the expiration is a string-encoded
/// integer of epoch seconds. Fields are optional at the parse stage so
/// that absence is a validation error with a precise message rather
/// than a parse error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub expiration_time: Option<String>,
}

/// Successful create response: the short code and the composed URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub code: String,
    pub shortened_url: String,
}
