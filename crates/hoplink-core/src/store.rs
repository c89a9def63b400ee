use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A minimal key-value object store.
///
/// One serialized [`UrlRecord`](crate::UrlRecord) lives at `<code>.json`.
/// Implementations must make a single key's write atomic: a concurrent
/// reader observes either a fully written object or none.
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Writes `bytes` under `key`, unconditionally overwriting any
    /// existing object.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()>;

    /// Reads the bytes stored under `key`.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound)
    /// if the key does not exist.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;
}

#[async_trait]
impl<S: ObjectStore + ?Sized> ObjectStore for Arc<S> {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        self.as_ref().put(key, bytes).await
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.as_ref().get(key).await
    }
}
