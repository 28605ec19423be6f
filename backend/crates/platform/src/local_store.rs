//! Local Key/Value Store
//!
//! A directory of JSON documents, one file per key. It plays the role a
//! browser's local storage plays for a single-page app: a best-effort
//! place for snapshots that must survive a restart.
//!
//! Reads never fail. A missing file, an unreadable file or a document that
//! no longer matches the expected shape are all reported as "absent", since
//! nothing stored here is authoritative.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Local store error (writes only)
#[derive(Debug, thiserror::Error)]
pub enum LocalStoreError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// JSON-file backed key/value store
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open (and create if needed) the store directory
    pub async fn open(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and decode the value stored under `key`
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key).ok()?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Local store read failed, treating as absent");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(key, error = %e, "Local store value has unexpected shape, ignoring");
                None
            }
        }
    }

    /// Encode and store `value` under `key`, replacing any previous value
    ///
    /// Each write goes to its own temp file in the store directory and is
    /// renamed over the old document, so readers see either the previous or
    /// the new snapshot and overlapping writes never share a file.
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), LocalStoreError> {
        let path = self.path_for(key)?;
        let bytes = serde_json::to_vec(value).map_err(|source| LocalStoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        let len = bytes.len();

        let root = self.root.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&root)?;
            tmp.write_all(&bytes)?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(std::io::Error::other)
        .and_then(|written| written)
        .map_err(|source| LocalStoreError::Io {
            key: key.to_string(),
            source,
        })?;

        tracing::trace!(key, bytes = len, "Local store value written");
        Ok(())
    }

    /// Remove the value stored under `key` (no-op when absent)
    pub async fn remove(&self, key: &str) -> Result<(), LocalStoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(LocalStoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, LocalStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(LocalStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        full_name: String,
        mobile: String,
    }

    async fn store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("cache")).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let (_dir, store) = store().await;
        let profile = Profile {
            full_name: "Somchai Jaidee".to_string(),
            mobile: "0812345678".to_string(),
        };

        store.set("user_profile", &profile).await.unwrap();
        let loaded: Option<Profile> = store.get("user_profile").await;
        assert_eq!(loaded, Some(profile));
    }

    #[tokio::test]
    async fn test_missing_key_is_absent() {
        let (_dir, store) = store().await;
        let loaded: Option<Profile> = store.get("user_profile").await;
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_value_is_absent() {
        let (_dir, store) = store().await;
        tokio::fs::write(store.root().join("user_profile.json"), b"{\"full_name\": 3")
            .await
            .unwrap();

        let loaded: Option<Profile> = store.get("user_profile").await;
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_absent() {
        let (_dir, store) = store().await;
        store.set("user_profile", &vec![1, 2, 3]).await.unwrap();

        let loaded: Option<Profile> = store.get("user_profile").await;
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_invalid_key_rejected() {
        let (_dir, store) = store().await;
        let err = store.set("../escape", &1).await.unwrap_err();
        assert!(matches!(err, LocalStoreError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn test_remove() {
        let (_dir, store) = store().await;
        store.set("cert_requests", &Vec::<u32>::new()).await.unwrap();
        store.remove("cert_requests").await.unwrap();
        store.remove("cert_requests").await.unwrap();
        assert!(store.get::<Vec<u32>>("cert_requests").await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_overlapping_writes_leave_a_whole_snapshot() {
        let (_dir, store) = store().await;

        for round in 0..50usize {
            let writes = (1..=4usize).map(|n| {
                let store = store.clone();
                tokio::spawn(async move {
                    let rows: Vec<usize> = (0..n * 25 + round).collect();
                    store.set("cert_requests", &rows).await
                })
            });
            for write in writes.collect::<Vec<_>>() {
                write.await.unwrap().unwrap();
            }

            let rows = store.get::<Vec<usize>>("cert_requests").await.unwrap();
            assert!((1..=4).any(|n| rows.len() == n * 25 + round));
        }

        let mut entries = tokio::fs::read_dir(store.root()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().into_string().unwrap());
        }
        assert_eq!(names, vec!["cert_requests.json".to_string()]);
    }
}
