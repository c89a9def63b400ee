use async_trait::async_trait;
use hoplink_core::error::Result;
use hoplink_core::{ObjectStore, StoreError};
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem-backed object store.
///
/// Keeps one file per object under a bucket directory. Writes go to a
/// uniquely named temp file first and are then renamed into place, so a
/// reader never observes a partially written object.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| StoreError::Unavailable(format!("{}: {e}", root.display())))?;
        Ok(Self { root })
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl ObjectStore for FsStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        let path = self.object_path(key);
        let tmp = self.root.join(format!("{key}.{}.tmp", Uuid::new_v4()));

        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::Operation(format!("writing {key}: {e}")))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::Operation(format!("committing {key}: {e}")))?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        match tokio::fs::read(self.object_path(key)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_owned()))
            }
            Err(e) => Err(StoreError::Operation(format!("reading {key}: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> (tempfile::TempDir, FsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::open(dir.path()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn put_and_get() {
        let (_dir, store) = store().await;

        store.put("abc12345.json", b"payload".to_vec()).await.unwrap();

        let bytes = store.get("abc12345.json").await.unwrap();
        assert_eq!(bytes, b"payload");
    }

    #[tokio::test]
    async fn get_missing_key() {
        let (_dir, store) = store().await;

        let err = store.get("nope.json").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn put_overwrites_silently() {
        let (_dir, store) = store().await;

        store.put("abc12345.json", b"first".to_vec()).await.unwrap();
        store.put("abc12345.json", b"second".to_vec()).await.unwrap();

        let bytes = store.get("abc12345.json").await.unwrap();
        assert_eq!(bytes, b"second");
    }

    #[tokio::test]
    async fn no_temp_files_left_behind() {
        let (dir, store) = store().await;

        store.put("abc12345.json", b"payload".to_vec()).await.unwrap();

        let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
        let mut names = vec![];
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().into_string().unwrap());
        }
        assert_eq!(names, vec!["abc12345.json"]);
    }

    #[tokio::test]
    async fn reopen_sees_existing_objects() {
        let (dir, store) = store().await;

        store.put("abc12345.json", b"payload".to_vec()).await.unwrap();

        let reopened = FsStore::open(dir.path()).await.unwrap();
        let bytes = reopened.get("abc12345.json").await.unwrap();
        assert_eq!(bytes, b"payload");
    }
}
