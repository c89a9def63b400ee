use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 8;

/// Suffix appended to a code to form its object store key.
const KEY_SUFFIX: &str = ".json";

/// A short code identifying a stored URL record.
///
/// Codes come from two trusted places: the code generator on the create
/// path, and the stripped request path on the resolve path. No further
/// validation is applied; an unknown code simply fails to resolve.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a short code from a string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the object store key for this code.
    pub fn object_key(&self) -> String {
        format!("{}{}", self.0, KEY_SUFFIX)
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
