use crate::error::ResolveError;
use crate::resolution::Resolution;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ResolveError>;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a raw request path to a redirect outcome.
    ///
    /// The short code is the path with separator characters stripped.
    async fn resolve(&self, raw_path: &str) -> Result<Resolution>;
}
