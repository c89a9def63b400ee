use crate::error::CreateError;
use crate::model::CreateResponse;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, CreateError>;

#[async_trait]
pub trait Creator: Send + Sync + 'static {
    /// Validates the raw request body, persists a new URL record under a
    /// freshly generated short code, and returns the code together with
    /// the composed short URL.
    async fn create(&self, raw_body: &str) -> Result<CreateResponse>;
}
