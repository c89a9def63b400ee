use crate::error::ResolveError;
use crate::redirector::Redirector;
use crate::resolution::Resolution;
use async_trait::async_trait;
use hoplink_core::{ObjectStore, ShortCode, UrlRecord};
use jiff::Timestamp;
use std::sync::Arc;
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, ResolveError>;

/// Service for handling URL redirects.
///
/// Fetches the record for a short code from the object store and checks
/// its expiration. A pure read; no retries and no side effects.
#[derive(Debug, Clone)]
pub struct RedirectorService<S> {
    store: Arc<S>,
}

impl<S: ObjectStore> RedirectorService<S> {
    /// Creates a new RedirectorService backed by the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Resolves a raw request path to a redirect outcome.
    ///
    /// # Returns
    ///
    /// * `Ok(Resolution::Redirect(url))` - The record is live
    /// * `Ok(Resolution::Expired)` - The record's expiration has passed
    /// * `Err(e)` - Invalid path, unknown code, or malformed record
    pub async fn resolve(&self, raw_path: &str) -> Result<Resolution> {
        Redirector::resolve(self, raw_path).await
    }
}

#[async_trait]
impl<S: ObjectStore> Redirector for RedirectorService<S> {
    async fn resolve(&self, raw_path: &str) -> Result<Resolution> {
        let code = extract_code(raw_path)?;
        trace!(code = %code, "resolving short code");

        let bytes = match self.store.get(&code.object_key()).await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(code = %code, error = %e, "store read failed, reporting not found");
                return Err(ResolveError::NotFound);
            }
        };

        let record = UrlRecord::from_json_bytes(&bytes).map_err(|e| {
            warn!(code = %code, error = %e, "stored record failed to parse");
            ResolveError::InvalidData
        })?;

        let now = Timestamp::now().as_second();
        if record.is_expired_at(now) {
            debug!(code = %code, "record has expired");
            return Ok(Resolution::Expired);
        }

        debug!(code = %code, url = %record.original_url, "resolved short code");
        Ok(Resolution::Redirect(record.original_url))
    }
}

/// Derives the short code from the raw request path by stripping path
/// separators. Only emptiness is checked; an unknown or garbled code
/// fails later as not found.
fn extract_code(raw_path: &str) -> Result<ShortCode> {
    if raw_path.is_empty() {
        return Err(ResolveError::InvalidInput);
    }
    Ok(ShortCode::new(raw_path.replace('/', "")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoplink_core::error::Result as StoreResult;
    use hoplink_core::StoreError;
    use hoplink_shortener::{Creator, SeqGenerator, ShortenerService};
    use hoplink_storage::InMemoryStore;

    async fn store_with_record(code: &str, record: &UrlRecord) -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store
            .put(
                &ShortCode::new(code).object_key(),
                record.to_json_bytes().unwrap(),
            )
            .await
            .unwrap();
        store
    }

    fn record(url: &str, expiration_time: i64) -> UrlRecord {
        UrlRecord {
            original_url: url.to_string(),
            expiration_time,
        }
    }

    #[tokio::test]
    async fn resolve_live_record() {
        let future = Timestamp::now().as_second() + 3600;
        let store = store_with_record("abc12345", &record("https://example.com", future)).await;
        let service = RedirectorService::new(store);

        let resolution = service.resolve("/abc12345").await.unwrap();
        assert_eq!(
            resolution,
            Resolution::Redirect("https://example.com".to_string())
        );
    }

    #[tokio::test]
    async fn resolve_expired_record() {
        let past = Timestamp::now().as_second() - 1;
        let store = store_with_record("abc12345", &record("https://example.com", past)).await;
        let service = RedirectorService::new(store);

        let resolution = service.resolve("/abc12345").await.unwrap();
        assert_eq!(resolution, Resolution::Expired);
    }

    #[tokio::test]
    async fn resolve_nonexistent_code() {
        let service = RedirectorService::new(InMemoryStore::new());

        let err = service.resolve("/zzzzzzzz").await.unwrap_err();
        assert_eq!(err, ResolveError::NotFound);
    }

    #[tokio::test]
    async fn resolve_empty_path() {
        let service = RedirectorService::new(InMemoryStore::new());

        let err = service.resolve("").await.unwrap_err();
        assert_eq!(err, ResolveError::InvalidInput);
    }

    #[tokio::test]
    async fn path_separators_are_stripped() {
        let future = Timestamp::now().as_second() + 3600;
        let store = store_with_record("abc12345", &record("https://example.com", future)).await;
        let service = RedirectorService::new(store);

        // With or without the leading slash the same code is looked up.
        assert!(service.resolve("/abc12345").await.is_ok());
        assert!(service.resolve("abc12345").await.is_ok());
    }

    #[tokio::test]
    async fn malformed_record_reports_invalid_data() {
        let store = Arc::new(InMemoryStore::new());
        store
            .put("abc12345.json", b"{definitely not a record".to_vec())
            .await
            .unwrap();
        let service = RedirectorService::new(store);

        let err = service.resolve("/abc12345").await.unwrap_err();
        assert_eq!(err, ResolveError::InvalidData);
    }

    struct FailingStore;

    #[async_trait]
    impl ObjectStore for FailingStore {
        async fn put(&self, _key: &str, _bytes: Vec<u8>) -> StoreResult<()> {
            Ok(())
        }

        async fn get(&self, _key: &str) -> StoreResult<Vec<u8>> {
            Err(StoreError::Unavailable("bucket offline".to_string()))
        }
    }

    #[tokio::test]
    async fn store_failures_collapse_into_not_found() {
        let service = RedirectorService::new(FailingStore);

        let err = service.resolve("/abc12345").await.unwrap_err();
        assert_eq!(err, ResolveError::NotFound);
    }

    #[tokio::test]
    async fn created_code_resolves_to_original_url() {
        let store = Arc::new(InMemoryStore::new());
        let creator = ShortenerService::new(
            Arc::clone(&store),
            SeqGenerator::with_prefix("hp"),
            "https://hop.link",
        );
        let service = RedirectorService::new(store);

        let future = Timestamp::now().as_second() + 3600;
        let response = creator
            .create(&format!(
                r#"{{"originalUrl":"https://example.com","expirationTime":"{future}"}}"#
            ))
            .await
            .unwrap();

        let resolution = service.resolve(&format!("/{}", response.code)).await.unwrap();
        assert_eq!(
            resolution,
            Resolution::Redirect("https://example.com".to_string())
        );
    }
}
