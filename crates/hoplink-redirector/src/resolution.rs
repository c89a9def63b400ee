/// Terminal outcome of a successful resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The record is live; redirect to the original URL.
    Redirect(String),
    /// The record exists but its expiration time has passed.
    Expired,
}
