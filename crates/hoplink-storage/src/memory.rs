use async_trait::async_trait;
use dashmap::DashMap;
use hoplink_core::error::Result;
use hoplink_core::{ObjectStore, StoreError};

/// In-memory implementation of the `ObjectStore` trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    objects: DashMap<String, Vec<u8>>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self {
            objects: DashMap::new(),
        }
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        self.objects.insert(key.to_owned(), bytes);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        match self.objects.get(key) {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(StoreError::NotFound(key.to_owned())),
        }
    }
}
